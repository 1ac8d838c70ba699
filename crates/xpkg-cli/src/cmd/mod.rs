pub mod hash;
pub mod paths;
pub mod pattern;
pub mod pkgver;
pub mod verify;
