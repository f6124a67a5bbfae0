pub const FLOORS: [u8; 3] = [1, 2, 3];

/// Study rooms shown on the landing page, grouped by floor.
pub const ROOMS: [Room; 5] = [
    Room::new("1.203", 1),
    Room::new("1.204", 1),
    Room::new("2.203", 2),
    Room::new("2.204", 2),
    Room::new("3.205", 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    pub code: &'static str,
    pub floor: u8,
}

impl Room {
    pub const fn new(code: &'static str, floor: u8) -> Self {
        Self { code, floor }
    }

    pub fn display_name(&self) -> String {
        format!("EIEAB {}", self.code)
    }
}

pub fn rooms_on_floor(floor: u8) -> impl Iterator<Item = Room> {
    ROOMS.into_iter().filter(move |room| room.floor == floor)
}
