//! Card issuer table
//!
//! Every issuer owns one anchored prefix/length pattern and the grouping
//! shapes it is printed with. The table order is canonical: several ranges
//! overlap (e.g. `visa` and `visa_master`), so the first matching entry
//! decides attribution and reordering changes behavior.

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Card issuer tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCompany {
    Visa,
    Master,
    Discover,
    AmericanExpress,
    DinersClub,
    Jcb,
    Switch,
    Solo,
    Dankort,
    Maestro,
    Forbrugsforeningen,
    Laser,
    BcGlobal,
    CarteBlanche,
    InstaPayment,
    KoreanLocal,
    UnionPay,
    VisaMaster,
}

/// Grouping shapes for one issuer
pub type Shapes = &'static [&'static [usize]];

const FOUR_BY_FOUR: Shapes = &[&[4, 4, 4, 4]];
const VISA_SHAPES: Shapes = &[&[4, 4, 4, 4], &[4, 4, 5]];
const AMEX_SHAPES: Shapes = &[&[4, 6, 5]];
const FOURTEEN_SHAPES: Shapes = &[&[4, 6, 4]];
const JCB_SHAPES: Shapes = &[&[4, 4, 4, 4], &[4, 6, 5]];
const MAESTRO_SHAPES: Shapes = &[&[4, 4, 4], &[4, 4, 5], &[4, 6, 5]];
const UNION_PAY_SHAPES: Shapes = &[&[4, 4, 4, 4], &[6, 13]];

/// Pattern and printed layouts for one issuer
#[derive(Debug, Clone, Copy)]
pub struct CompanyRules {
    /// Anchored regex over the digit-only projection
    pub pattern: &'static str,

    /// Accepted group lengths; groups past a shape's length are unconstrained
    pub shapes: Shapes,
}

impl CardCompany {
    /// All issuers in attribution order
    pub const ALL: [CardCompany; 18] = [
        CardCompany::Visa,
        CardCompany::Master,
        CardCompany::Discover,
        CardCompany::AmericanExpress,
        CardCompany::DinersClub,
        CardCompany::Jcb,
        CardCompany::Switch,
        CardCompany::Solo,
        CardCompany::Dankort,
        CardCompany::Maestro,
        CardCompany::Forbrugsforeningen,
        CardCompany::Laser,
        CardCompany::BcGlobal,
        CardCompany::CarteBlanche,
        CardCompany::InstaPayment,
        CardCompany::KoreanLocal,
        CardCompany::UnionPay,
        CardCompany::VisaMaster,
    ];

    /// Pattern and shapes for this issuer
    pub fn rules(self) -> CompanyRules {
        let (pattern, shapes) = match self {
            CardCompany::Visa => (r"^4[0-9]{12}(?:[0-9]{3}){0,2}$", VISA_SHAPES),
            CardCompany::Master => (
                r"^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$",
                FOUR_BY_FOUR,
            ),
            CardCompany::Discover => (r"^6(?:011|4[4-9][0-9]|5[0-9]{2})[0-9]{12}$", FOUR_BY_FOUR),
            CardCompany::AmericanExpress => (r"^3[47][0-9]{13}$", AMEX_SHAPES),
            CardCompany::DinersClub => (r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$", FOURTEEN_SHAPES),
            CardCompany::Jcb => (r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$", JCB_SHAPES),
            CardCompany::Switch => (
                r"^(?:(?:4903|4905|4911|4936|6333|6759)[0-9]{12}|(?:564182|633110)[0-9]{10})(?:[0-9]{2,3})?$",
                FOUR_BY_FOUR,
            ),
            CardCompany::Solo => (r"^(?:6334|6767)[0-9]{12}(?:[0-9]{2,3})?$", FOUR_BY_FOUR),
            CardCompany::Dankort => (r"^5019[0-9]{12}$", FOUR_BY_FOUR),
            CardCompany::Maestro => (
                r"^(?:5018|5020|5038|5612|5893|6304|6759|6761|6762|6763|0604|6390)[0-9]{8,15}$",
                MAESTRO_SHAPES,
            ),
            CardCompany::Forbrugsforeningen => (r"^600722[0-9]{10}$", FOUR_BY_FOUR),
            CardCompany::Laser => (r"^(?:6304|6706|6709|6771)[0-9]{12,15}$", FOUR_BY_FOUR),
            CardCompany::BcGlobal => (r"^(?:6541|6556)[0-9]{12}$", FOUR_BY_FOUR),
            CardCompany::CarteBlanche => (r"^389[0-9]{11}$", FOURTEEN_SHAPES),
            CardCompany::InstaPayment => (r"^63[7-9][0-9]{13}$", FOUR_BY_FOUR),
            CardCompany::KoreanLocal => (r"^9[0-9]{15}$", FOUR_BY_FOUR),
            CardCompany::UnionPay => (r"^62[0-9]{14,17}$", UNION_PAY_SHAPES),
            CardCompany::VisaMaster => (
                r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14})$",
                FOUR_BY_FOUR,
            ),
        };

        CompanyRules { pattern, shapes }
    }

    /// Accepted grouping shapes
    pub fn shapes(self) -> Shapes {
        self.rules().shapes
    }

    /// snake_case tag, as used in serialized form
    pub fn name(self) -> &'static str {
        match self {
            CardCompany::Visa => "visa",
            CardCompany::Master => "master",
            CardCompany::Discover => "discover",
            CardCompany::AmericanExpress => "american_express",
            CardCompany::DinersClub => "diners_club",
            CardCompany::Jcb => "jcb",
            CardCompany::Switch => "switch",
            CardCompany::Solo => "solo",
            CardCompany::Dankort => "dankort",
            CardCompany::Maestro => "maestro",
            CardCompany::Forbrugsforeningen => "forbrugsforeningen",
            CardCompany::Laser => "laser",
            CardCompany::BcGlobal => "bc_global",
            CardCompany::CarteBlanche => "carte_blanche",
            CardCompany::InstaPayment => "insta_payment",
            CardCompany::KoreanLocal => "korean_local",
            CardCompany::UnionPay => "union_pay",
            CardCompany::VisaMaster => "visa_master",
        }
    }

    /// Attribute a digit string to the first matching issuer
    pub fn detect(digits: &str) -> Option<CardCompany> {
        // RegexSet reports indices in pattern order, which is table order
        COMPANY_PATTERNS
            .matches(digits)
            .iter()
            .next()
            .map(|index| CardCompany::ALL[index])
    }
}

impl std::fmt::Display for CardCompany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static COMPANY_PATTERNS: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(CardCompany::ALL.iter().map(|c| c.rules().pattern)).unwrap());

/// True if any issuer pattern matches, regardless of attribution order
pub fn valid_prefix(digits: &str) -> bool {
    COMPANY_PATTERNS.is_match(digits)
}
