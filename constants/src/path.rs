/// Scene description read at startup, relative to the working directory
pub const SCENE_PATH: &str = "my.xyz";

/// Optional JSON overrides for the defaults in this crate
pub const CONFIG_PATH: &str = "volume_viewer.json";

/// Billboard image for the skull kind
pub const SKULL_IMAGE_PATH: &str = "t2.png";

/// Billboard image for the drone kind
pub const DRONE_IMAGE_PATH: &str = "drone.png";
