use glam::Vec3;

use crate::types::ColoredVertex;

pub const FLOOR_CEILING_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
pub const SIDE_WALL_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const END_WALL_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Which face of the room a quad belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFace {
    Floor,
    Ceiling,
    /// x = -size
    LeftWall,
    /// x = +size
    RightWall,
    /// z = -size, ahead of the starting camera
    FrontWall,
    /// z = +size
    BackWall,
}

impl RoomFace {
    pub const ALL: [RoomFace; 6] = [
        RoomFace::Floor,
        RoomFace::Ceiling,
        RoomFace::LeftWall,
        RoomFace::RightWall,
        RoomFace::FrontWall,
        RoomFace::BackWall,
    ];

    pub fn color(self) -> [f32; 3] {
        match self {
            RoomFace::Floor | RoomFace::Ceiling => FLOOR_CEILING_COLOR,
            RoomFace::LeftWall | RoomFace::RightWall => SIDE_WALL_COLOR,
            RoomFace::FrontWall | RoomFace::BackWall => END_WALL_COLOR,
        }
    }

    /// Corner loop for this face of a room spanning x, z in [-size, size] and y in [0, size]
    fn corners(self, size: f32) -> [Vec3; 4] {
        let s = size;
        match self {
            RoomFace::Floor => [
                Vec3::new(-s, 0.0, -s),
                Vec3::new(s, 0.0, -s),
                Vec3::new(s, 0.0, s),
                Vec3::new(-s, 0.0, s),
            ],
            RoomFace::Ceiling => [
                Vec3::new(-s, s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
            ],
            RoomFace::LeftWall => [
                Vec3::new(-s, 0.0, -s),
                Vec3::new(-s, s, -s),
                Vec3::new(-s, s, s),
                Vec3::new(-s, 0.0, s),
            ],
            RoomFace::RightWall => [
                Vec3::new(s, 0.0, -s),
                Vec3::new(s, s, -s),
                Vec3::new(s, s, s),
                Vec3::new(s, 0.0, s),
            ],
            RoomFace::FrontWall => [
                Vec3::new(-s, 0.0, -s),
                Vec3::new(s, 0.0, -s),
                Vec3::new(s, s, -s),
                Vec3::new(-s, s, -s),
            ],
            RoomFace::BackWall => [
                Vec3::new(-s, 0.0, s),
                Vec3::new(s, 0.0, s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
            ],
        }
    }
}

/// Flat colored quad, corners in loop order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub face: RoomFace,
    pub corners: [Vec3; 4],
    pub color: [f32; 3],
}

impl Quad {
    /// Split into two triangles sharing the first corner
    pub fn vertices(&self) -> [ColoredVertex; 6] {
        let [a, b, c, d] = self.corners;
        [a, b, c, a, c, d].map(|p| ColoredVertex::new(p.to_array(), self.color))
    }
}

/// The six faces of the fallback room
pub fn fallback_room(size: f32) -> [Quad; 6] {
    RoomFace::ALL.map(|face| Quad {
        face,
        corners: face.corners(size),
        color: face.color(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_has_six_quads() {
        let room = fallback_room(10.0);
        assert_eq!(room.len(), 6);
        assert_eq!(room.map(|q| q.face), RoomFace::ALL);
    }

    #[test]
    fn test_face_colors() {
        let room = fallback_room(10.0);
        assert_eq!(room[0].color, [0.0, 0.0, 1.0]);
        assert_eq!(room[1].color, [0.0, 0.0, 1.0]);
        assert_eq!(room[2].color, [1.0, 0.0, 0.0]);
        assert_eq!(room[3].color, [1.0, 0.0, 0.0]);
        assert_eq!(room[4].color, [0.0, 1.0, 0.0]);
        assert_eq!(room[5].color, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_quads_are_planar_on_their_face() {
        let room = fallback_room(10.0);
        for quad in room {
            let on_plane = |p: Vec3| match quad.face {
                RoomFace::Floor => p.y == 0.0,
                RoomFace::Ceiling => p.y == 10.0,
                RoomFace::LeftWall => p.x == -10.0,
                RoomFace::RightWall => p.x == 10.0,
                RoomFace::FrontWall => p.z == -10.0,
                RoomFace::BackWall => p.z == 10.0,
            };
            assert!(quad.corners.iter().all(|&p| on_plane(p)), "{:?}", quad.face);
        }
    }

    #[test]
    fn test_room_extent() {
        let room = fallback_room(10.0);
        let (min, max) = room
            .iter()
            .flat_map(|q| q.corners)
            .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            });
        assert_eq!(min, Vec3::new(-10.0, 0.0, -10.0));
        assert_eq!(max, Vec3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_quad_vertices_keep_face_color() {
        let quad = fallback_room(10.0)[2];
        let vertices = quad.vertices();
        assert!(vertices.iter().all(|v| v.color == SIDE_WALL_COLOR));
        assert_eq!(vertices[0], vertices[3]);
        assert_eq!(vertices[2], vertices[4]);
    }
}
