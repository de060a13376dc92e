pub mod generate;
pub mod manifest;
pub mod svg;
pub mod verify;
