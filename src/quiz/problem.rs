//! Arithmetic problems

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::GradebookError;

/// Operand size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Single digit operands
    Easy,

    /// Two digit operands
    Moderate,

    /// Four digit operands
    Advanced,
}

impl Difficulty {
    /// Inclusive operand range
    pub fn operand_range(&self) -> RangeInclusive<i64> {
        match self {
            Difficulty::Easy => 1..=9,
            Difficulty::Moderate => 10..=99,
            Difficulty::Advanced => 1000..=9999,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("Easy"),
            Difficulty::Moderate => f.write_str("Moderate"),
            Difficulty::Advanced => f.write_str("Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(GradebookError::InvalidInput(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

/// `left <op> right`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub left: i64,
    pub right: i64,
    pub operation: Operation,
}

impl Problem {
    /// Draw two operands and an operation
    pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let left = rng.random_range(difficulty.operand_range());
        let right = rng.random_range(difficulty.operand_range());
        let operation = if rng.random_bool(0.5) {
            Operation::Add
        } else {
            Operation::Subtract
        };
        Self {
            left,
            right,
            operation,
        }
    }

    /// The correct answer (may be negative for subtraction)
    pub fn answer(&self) -> i64 {
        match self.operation {
            Operation::Add => self.left + self.right,
            Operation::Subtract => self.left - self.right,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = ?",
            self.left,
            self.operation.symbol(),
            self.right
        )
    }
}
