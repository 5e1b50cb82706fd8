mod assets;
pub use assets::*;

use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod formwork_assets;
        pub use formwork_assets::*;
    }
);
