use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Computer,
    Human,
}

impl Player {
    /// Board encoding used for scoring: computer `+1`, human `-1`.
    pub fn marker(self) -> i8 {
        match self {
            Player::Computer => 1,
            Player::Human => -1,
        }
    }

    pub fn from_marker(marker: i8) -> Option<Self> {
        match marker {
            1 => Some(Player::Computer),
            -1 => Some(Player::Human),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::Computer
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Computer => write!(f, "computer"),
            Player::Human => write!(f, "human"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn marker(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.marker(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Final result of a game, seen from the computer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    ComputerWins,
    HumanWins,
    Draw,
}

impl GameOutcome {
    /// `1` computer win, `-1` human win, `0` draw.
    pub fn value(self) -> i32 {
        match self {
            GameOutcome::ComputerWins => 1,
            GameOutcome::HumanWins => -1,
            GameOutcome::Draw => 0,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::ComputerWins => Some(Player::Computer),
            GameOutcome::HumanWins => Some(Player::Human),
            GameOutcome::Draw => None,
        }
    }

    pub fn from_winner(player: Player) -> Self {
        match player {
            Player::Computer => GameOutcome::ComputerWins,
            Player::Human => GameOutcome::HumanWins,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::ComputerWins => write!(f, "computer wins"),
            GameOutcome::HumanWins => write!(f, "human wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    ComputerWins,
    HumanWins,
    Draw,
}

impl GameStatus {
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::ComputerWins => Some(GameOutcome::ComputerWins),
            GameStatus::HumanWins => Some(GameOutcome::HumanWins),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }
}

impl From<Option<GameOutcome>> for GameStatus {
    fn from(outcome: Option<GameOutcome>) -> Self {
        match outcome {
            None => GameStatus::InProgress,
            Some(GameOutcome::ComputerWins) => GameStatus::ComputerWins,
            Some(GameOutcome::HumanWins) => GameStatus::HumanWins,
            Some(GameOutcome::Draw) => GameStatus::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind, start: Move, end: Move) -> Self {
        Self {
            player,
            kind,
            start,
            end,
        }
    }
}
