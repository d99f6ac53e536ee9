use crate::constants::PROTECTED_BRANCHES;
use colored::Color;

/// Colors the prompt is allowed to use, independent of escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Red,
    Green,
    White,
    Yellow,
    Cyan,
}

impl SemanticColor {
    #[inline]
    pub fn to_color(self) -> Color {
        match self {
            SemanticColor::Red => Color::Red,
            SemanticColor::Green => Color::Green,
            SemanticColor::White => Color::White,
            SemanticColor::Yellow => Color::Yellow,
            SemanticColor::Cyan => Color::Cyan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchClass {
    Protected,
    Other,
}

impl BranchClass {
    pub fn classify(branch: &str) -> Self {
        if PROTECTED_BRANCHES.contains(&branch) {
            BranchClass::Protected
        } else {
            BranchClass::Other
        }
    }
}

/// Fixed color choices for one branch classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTheme {
    /// Parentheses and clean branch text
    pub base: SemanticColor,
    /// Branch text when the working tree is dirty
    pub dirty_text: SemanticColor,
    /// Branch background when the working tree is dirty
    pub dirty_background: SemanticColor,
    pub tracking: SemanticColor,
    pub untracked: SemanticColor,
}

impl PromptTheme {
    pub const PROTECTED: PromptTheme = PromptTheme {
        base: SemanticColor::Red,
        dirty_text: SemanticColor::White,
        dirty_background: SemanticColor::Red,
        tracking: SemanticColor::Yellow,
        untracked: SemanticColor::Cyan,
    };

    pub const OTHER: PromptTheme = PromptTheme {
        base: SemanticColor::Green,
        dirty_text: SemanticColor::White,
        dirty_background: SemanticColor::Green,
        tracking: SemanticColor::Yellow,
        untracked: SemanticColor::Cyan,
    };

    pub fn for_class(class: BranchClass) -> Self {
        match class {
            BranchClass::Protected => Self::PROTECTED,
            BranchClass::Other => Self::OTHER,
        }
    }

    pub fn for_branch(branch: &str) -> Self {
        Self::for_class(BranchClass::classify(branch))
    }

    /// Foreground and optional background for the branch name
    pub fn branch_colors(&self, dirty: bool) -> (SemanticColor, Option<SemanticColor>) {
        if dirty {
            (self.dirty_text, Some(self.dirty_background))
        } else {
            (self.base, None)
        }
    }
}
