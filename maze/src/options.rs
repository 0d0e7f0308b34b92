use glam::IVec2;

/// Geometry settings for turning a `Grid` in to map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Map position of the bottom-left corner of the maze
    pub offset: IVec2,
    /// Map units across a passage
    pub pass_width: i32,
    /// Map units across a wall or pole
    pub pole_width: i32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            offset: IVec2::ZERO,
            pass_width: 128,
            pole_width: 32,
        }
    }
}

/// Everything about the written map that isn't geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStyle {
    /// Name of the map marker lump
    pub map_name: String,
    pub floor_height: i32,
    pub ceiling_height: i32,
    pub floor_texture: String,
    pub ceiling_texture: String,
    pub wall_texture: String,
    pub light_level: i32,
    /// Facing of every thing, in degrees
    pub thing_angle: i32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            map_name: "MAP01".to_owned(),
            floor_height: 0,
            ceiling_height: 144,
            floor_texture: "FLOOR0_1".to_owned(),
            ceiling_texture: "F_SKY1".to_owned(),
            wall_texture: "STARTAN1".to_owned(),
            light_level: 192,
            thing_angle: 90,
        }
    }
}
