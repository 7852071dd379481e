use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AwardCategory {
    BestActor,
    BestPicture,
    BestDirector,
    BestHero,
}

impl AwardCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AwardCategory::BestActor => "Best Actor",
            AwardCategory::BestPicture => "Best Picture",
            AwardCategory::BestDirector => "Best Director",
            AwardCategory::BestHero => "Best Hero",
        }
    }
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Identifies an award inside a collection: one entry per category and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AwardKey {
    pub category: AwardCategory,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Award {
    category: AwardCategory,
    year: i32,
}

impl Award {
    pub fn new(category: AwardCategory, year: i32) -> Self {
        Self { category, year }
    }

    pub fn category(&self) -> AwardCategory {
        self.category
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn key(&self) -> AwardKey {
        AwardKey {
            category: self.category,
            year: self.year,
        }
    }
}
