//! Quiz session state

use std::fmt;

use rand::Rng;

use crate::error::{GradebookError, Result};

use super::{Difficulty, Problem};

/// Questions asked per session
pub const QUESTIONS_PER_QUIZ: usize = 10;

/// Points for a correct first answer
pub const FIRST_ATTEMPT_POINTS: u32 = 10;

/// Points for a correct second answer
pub const SECOND_ATTEMPT_POINTS: u32 = 5;

/// Best possible session score
pub const MAX_SCORE: u32 = QUESTIONS_PER_QUIZ as u32 * FIRST_ATTEMPT_POINTS;

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; the question is closed
    Correct { points: u32 },

    /// First wrong answer; one more attempt allowed
    TryAgain,

    /// Second wrong answer; the question is closed
    Incorrect { answer: i64 },
}

/// One run of the quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    difficulty: Difficulty,

    /// Questions handed out so far, including the active one
    asked: usize,

    score: u32,

    /// Question awaiting an answer
    current: Option<Problem>,

    /// Whether the active question is still on its first attempt
    first_attempt: bool,
}

impl QuizSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            asked: 0,
            score: 0,
            current: None,
            first_attempt: true,
        }
    }

    /// Hand out the next question
    ///
    /// Returns the active question again if it has not been closed, and
    /// `None` once all questions have been asked.
    pub fn next_problem<R: Rng>(&mut self, rng: &mut R) -> Option<Problem> {
        if let Some(problem) = self.current {
            return Some(problem);
        }
        if self.asked >= QUESTIONS_PER_QUIZ {
            return None;
        }

        let problem = Problem::generate(self.difficulty, rng);
        self.asked += 1;
        self.current = Some(problem);
        self.first_attempt = true;

        tracing::debug!(question = self.asked, problem = %problem, "Asking question");
        Some(problem)
    }

    /// Check a raw answer against the active question
    ///
    /// Input that is not an integer is rejected without using an attempt.
    pub fn submit(&mut self, input: &str) -> Result<AnswerOutcome> {
        let problem = self
            .current
            .ok_or_else(|| GradebookError::InvalidInput("no question is active".to_string()))?;

        let guess: i64 = input.trim().parse().map_err(|_| {
            GradebookError::InvalidInput(format!("'{}' is not a valid number", input.trim()))
        })?;

        let outcome = if guess == problem.answer() {
            let points = if self.first_attempt {
                FIRST_ATTEMPT_POINTS
            } else {
                SECOND_ATTEMPT_POINTS
            };
            self.score += points;
            self.current = None;
            AnswerOutcome::Correct { points }
        } else if self.first_attempt {
            self.first_attempt = false;
            AnswerOutcome::TryAgain
        } else {
            self.current = None;
            AnswerOutcome::Incorrect {
                answer: problem.answer(),
            }
        };

        Ok(outcome)
    }

    /// Close the active question with no points (time ran out)
    ///
    /// Returns the correct answer, or `None` if nothing was active.
    pub fn expire(&mut self) -> Option<i64> {
        self.current.take().map(|p| p.answer())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the most recent question
    pub fn question_number(&self) -> usize {
        self.asked
    }

    pub fn current(&self) -> Option<Problem> {
        self.current
    }

    /// Whether the active question is still on its first attempt
    pub fn is_first_attempt(&self) -> bool {
        self.first_attempt
    }

    /// All questions asked and none left open
    pub fn is_finished(&self) -> bool {
        self.asked >= QUESTIONS_PER_QUIZ && self.current.is_none()
    }

    /// Score as a percentage of `MAX_SCORE`
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE) * 100.0
    }

    pub fn grade(&self) -> QuizGrade {
        QuizGrade::from_score(self.score)
    }
}

/// Grade for a quiz score out of 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizGrade {
    APlus,
    A,
    B,
    C,
    Fail,
}

impl QuizGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => QuizGrade::APlus,
            80..=89 => QuizGrade::A,
            70..=79 => QuizGrade::B,
            60..=69 => QuizGrade::C,
            _ => QuizGrade::Fail,
        }
    }

    pub fn remark(&self) -> &'static str {
        match self {
            QuizGrade::APlus => "Outstanding! You mastered this quiz!",
            QuizGrade::A => "Excellent work!",
            QuizGrade::B => "Great effort!",
            QuizGrade::C => "Good try, keep practicing!",
            QuizGrade::Fail => "Don't worry, try again to improve!",
        }
    }
}

impl fmt::Display for QuizGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizGrade::APlus => "A+",
            QuizGrade::A => "A",
            QuizGrade::B => "B",
            QuizGrade::C => "C",
            QuizGrade::Fail => "Fail",
        };
        f.write_str(label)
    }
}
