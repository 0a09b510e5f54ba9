use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Cost of moving a tile that is not listed as heavy or fixed.
pub const LIGHT_COST: u32 = 1;

pub const DEFAULT_HEAVY_COST: u32 = 30;

/// IDDFS tries depth bounds `1..IDDFS_DEPTH_LIMIT`.
pub const IDDFS_DEPTH_LIMIT: u16 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Bfs,
    Iddfs,
    AStar,
    IdaStar,
    DfBnB,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Bfs,
        Method::Iddfs,
        Method::AStar,
        Method::IdaStar,
        Method::DfBnB,
    ];

    /// Informed methods minimize weighted cost, the others only the number of moves.
    pub fn is_informed(self) -> bool {
        match self {
            Method::Bfs | Method::Iddfs => false,
            Method::AStar | Method::IdaStar | Method::DfBnB => true,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "BFS"),
            Method::Iddfs => write!(f, "IDDFS"),
            Method::AStar => write!(f, "A*"),
            Method::IdaStar => write!(f, "IDA*"),
            Method::DfBnB => write!(f, "DFBnB"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodErr(pub String);

impl Display for MethodErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported search algorithm: '{}'", self.0)
    }
}

impl Error for MethodErr {}

impl FromStr for Method {
    type Err = MethodErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BFS" => Ok(Method::Bfs),
            "IDDFS" => Ok(Method::Iddfs),
            "A*" => Ok(Method::AStar),
            "IDA*" => Ok(Method::IdaStar),
            "DFBNB" => Ok(Method::DfBnB),
            _ => Err(MethodErr(s.trim().to_string())),
        }
    }
}
