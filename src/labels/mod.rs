/*! Category labels and keyword rules.

[Category] is the fixed set of labels a post can receive, [KeywordRule] pairs
a category with a word-boundary-anchored keyword pattern, and
[RuleClassifier] evaluates an ordered rule list, first match wins.
!*/
mod category;
mod rules;

pub use category::Category;
pub use rules::default_rules;
pub use rules::KeywordRule;
pub use rules::RuleClassifier;
