//! Ordered keyword rules and the rule classifier.
//!
//! Rule order is load-bearing: a text matching keywords from two categories is
//! classified by whichever rule is declared first. [RULE_TABLE] keeps the
//! original priority order and must not be reordered.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use super::Category;

/// Keyword alternatives per category, in priority order.
///
/// The classifier tests these top to bottom and stops at the first match, so
/// e.g. a post mentioning both a crash and a fire is an auto_accident.
/// `cyclone` appears under both tornado and hurricane; tornado wins by order.
const RULE_TABLE: &[(Category, &[&str])] = &[
    (
        Category::AutoAccident,
        &[
            "crash",
            "accident",
            "collision",
            "wreck",
            "car accident",
            "vehicle accident",
            "traffic accident",
            "car crash",
            "road accident",
        ],
    ),
    (
        Category::Fire,
        &[
            "fire",
            "blaze",
            "wildfire",
            "burning",
            "explosion",
            "ablaze",
            "arson",
            "smoke",
            "flames",
        ],
    ),
    (
        Category::Flood,
        &[
            "flood",
            "flooding",
            "inundation",
            "deluge",
            "flash flood",
            "water level",
            "submerged",
        ],
    ),
    (
        Category::Earthquake,
        &[
            "earthquake",
            "tremor",
            "seismic",
            "magnitude",
            "epicenter",
            "aftershock",
            "quake",
        ],
    ),
    (
        Category::SevereStorm,
        &[
            "storm",
            "thunderstorm",
            "hail",
            "lightning",
            "windstorm",
            "gale",
            "squall",
            "downpour",
        ],
    ),
    (
        Category::Shooting,
        &[
            "shooting",
            "gunfire",
            "active shooter",
            "mass shooting",
            "gun violence",
            "shot",
            "fired",
        ],
    ),
    (
        Category::Tornado,
        &["tornado", "funnel cloud", "twister", "cyclone", "supercell"],
    ),
    (
        Category::Hurricane,
        &["hurricane", "cyclone", "storm surge", "eyewall"],
    ),
    (
        Category::ExtremeHeat,
        &[
            "heat wave",
            "extreme heat",
            "drought",
            "scorching",
            "heatstroke",
            "temperature record",
        ],
    ),
    (
        Category::TropicalStorm,
        &["tropical storm", "monsoon", "typhoon", "tropical depression"],
    ),
    (
        Category::OtherDisaster,
        &[
            "avalanche",
            "landslide",
            "volcano",
            "tsunami",
            "eruption",
            "mudslide",
            "disaster",
            "emergency",
        ],
    ),
];

lazy_static! {
    /// Default rule list, compiled once. Same order as [RULE_TABLE].
    static ref DEFAULT_RULES: Vec<KeywordRule> = RULE_TABLE
        .iter()
        .map(|(category, keywords)| KeywordRule::new(*category, keywords))
        .collect::<Result<Vec<_>, _>>()
        .expect("default keyword rules compile");
}

/// The default rule list, in priority order.
pub fn default_rules() -> Vec<KeywordRule> {
    DEFAULT_RULES.clone()
}

/// A category paired with its keyword pattern.
///
/// The pattern is a single word-boundary-anchored alternation over the
/// keywords, so short keywords do not fire as substrings of unrelated words
/// ("shot" never matches "shotgun"). Multi-word keywords match as whole
/// phrases.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    category: Category,
    pattern: Regex,
}

impl KeywordRule {
    /// Build a rule from literal keywords. Keywords are regex-escaped; matching
    /// expects lowercased input, so keywords should be lowercase too.
    pub fn new(category: Category, keywords: &[&str]) -> Result<Self, Error> {
        let alternation = keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation))?;

        Ok(Self { category, pattern })
    }

    /// Get the rule's category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Test an already-lowercased text against the rule's pattern.
    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// Maps a text to exactly one [Category].
///
/// Rules are evaluated in list order, short-circuiting on the first match;
/// if none matches (or the text is absent) the default category is returned.
/// The rule list and default are explicit construction parameters so callers
/// can substitute their own tables, but the order they pass is honored as-is.
pub struct RuleClassifier {
    rules: Vec<KeywordRule>,
    default: Category,
}

impl RuleClassifier {
    pub fn new(rules: Vec<KeywordRule>, default: Category) -> Self {
        Self { rules, default }
    }

    /// Get a reference to the classifier's rules, in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Get the classifier's default category.
    pub fn default_category(&self) -> Category {
        self.default
    }

    /// Returns the category of the first matching rule, or the default one.
    pub fn classify(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();

        for rule in &self.rules {
            if rule.matches(&lowered) {
                return rule.category();
            }
        }

        self.default
    }

    /// Like [RuleClassifier::classify]; an absent text gets the default category.
    pub fn classify_opt(&self, text: Option<&str>) -> Category {
        match text {
            Some(text) => self.classify(text),
            None => self.default,
        }
    }
}

impl Default for RuleClassifier {
    /// Default classifier: [default_rules] with [Category::NotRelevant] fallback.
    fn default() -> Self {
        Self::new(default_rules(), Category::NotRelevant)
    }
}
