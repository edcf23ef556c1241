//! All game entity types — plain data plus lookup tables, no behaviour.

use crate::config::{PLAYER_START_X, PLAYER_START_Y, STARTING_LEVEL, STARTING_LIVES};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Everything the outside world can feed into a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    SelectCharacter(CharacterId),
    RestartRequested,
}

// ── Characters ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CharacterId {
    #[default]
    Princess,
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
}

#[derive(Debug)]
pub struct CharacterProfile {
    pub id: CharacterId,
    /// Key used by the selection menu, also the sprite's file stem.
    pub key: &'static str,
    pub sprite: &'static str,
    pub name: &'static str,
}

pub static CHARACTERS: [CharacterProfile; 5] = [
    CharacterProfile {
        id: CharacterId::Princess,
        key: "char-princess-girl",
        sprite: "images/char-princess-girl.png",
        name: "The princess",
    },
    CharacterProfile {
        id: CharacterId::Boy,
        key: "char-boy",
        sprite: "images/char-boy.png",
        name: "The alien",
    },
    CharacterProfile {
        id: CharacterId::CatGirl,
        key: "char-cat-girl",
        sprite: "images/char-cat-girl.png",
        name: "Kitty",
    },
    CharacterProfile {
        id: CharacterId::HornGirl,
        key: "char-horn-girl",
        sprite: "images/char-horn-girl.png",
        name: "The viking",
    },
    CharacterProfile {
        id: CharacterId::PinkGirl,
        key: "char-pink-girl",
        sprite: "images/char-pink-girl.png",
        name: "Barbie",
    },
];

impl CharacterId {
    pub fn profile(self) -> &'static CharacterProfile {
        // The table is ordered like the enum.
        &CHARACTERS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn from_key(key: &str) -> Option<CharacterId> {
        CHARACTERS.iter().find(|c| c.key == key).map(|c| c.id)
    }

    /// 1-based menu slot, as shown on the selection panel.
    pub fn from_menu_slot(slot: usize) -> Option<CharacterId> {
        slot.checked_sub(1)
            .and_then(|i| CHARACTERS.get(i))
            .map(|c| c.id)
    }
}

// ── Gems ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GemKind {
    /// Blue gem, 1 point.
    Low,
    /// Green gem, 2 points.
    Mid,
    /// Key, 5 points.
    High,
}

impl GemKind {
    pub const ALL: [GemKind; 3] = [GemKind::Low, GemKind::Mid, GemKind::High];

    pub fn points(self) -> i32 {
        match self {
            GemKind::Low => 1,
            GemKind::Mid => 2,
            GemKind::High => 5,
        }
    }

    pub fn sprite(self) -> &'static str {
        match self {
            GemKind::Low => "images/Gem Blue-130.png",
            GemKind::Mid => "images/Gem Green-130.png",
            GemKind::High => "images/Key-130.png",
        }
    }
}

// ── Rendering ids ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Enemy,
    Character(CharacterId),
    Gem(GemKind),
}

impl Sprite {
    pub fn path(self) -> &'static str {
        match self {
            Sprite::Enemy => "images/enemy-bug.png",
            Sprite::Character(id) => id.profile().sprite,
            Sprite::Gem(kind) => kind.sprite(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    SelectPlayer,
    ScorePanel,
    WinLoseMessage,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatus {
    NotStarted,
    Playing,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Position,
    pub character: CharacterId,
    pub level: u32,
    pub lives: u8,
    pub score: i32,
    pub enemies_avoided: u32,
    pub status: PlayerStatus,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            pos: Position::new(PLAYER_START_X, PLAYER_START_Y),
            character: CharacterId::default(),
            level: STARTING_LEVEL,
            lives: STARTING_LIVES,
            score: 0,
            enemies_avoided: 0,
            status: PlayerStatus::NotStarted,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Position,
    /// Pixels per second.
    pub speed: f64,
    /// Index into `config::ENEMY_LANES`.
    pub lane: usize,
}

#[derive(Clone, Debug)]
pub struct Gem {
    pub pos: Position,
    pub kind: GemKind,
}
