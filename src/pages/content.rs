//! Literal copy and figures for both landing page variants.
//!
//! Every number here is display text. Nothing on the page computes a score or
//! a saving.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub order: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStepInfo {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavingsExample {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static [&'static str],
    pub savings: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

/// Plain attributed quote, as the classic page shows it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub end: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Caution,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Danger => "tone-danger",
            Tone::Warning => "tone-warning",
            Tone::Caution => "tone-caution",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProblemFact {
    pub headline: &'static str,
    pub detail: &'static str,
    pub tone: Tone,
}

pub const DEFAULT_RATING: u8 = 5;

// Modern page

pub const HERO_STATS: &[Stat] = &[
    Stat { end: 73.0, prefix: "", suffix: "%", label: "Documents with errors" },
    Stat { end: 2500.0, prefix: "$", suffix: "", label: "Average savings" },
    Stat { end: 60.0, prefix: "", suffix: "s", label: "Analysis time" },
];

pub const PRESS: &[&str] = &[
    "Texas Monthly",
    "Austin Business Journal",
    "Houston Chronicle",
    "D Magazine",
];

pub const PROBLEM_FACTS: &[ProblemFact] = &[
    ProblemFact {
        headline: "$1,500-$3,000",
        detail: "Average overpayment at closing due to errors and hidden fees",
        tone: Tone::Danger,
    },
    ProblemFact {
        headline: "156 Pages",
        detail: "Average closing document length filled with complex legal terms",
        tone: Tone::Warning,
    },
    ProblemFact {
        headline: "24 Hours",
        detail: "Typical review time before signing life-changing documents",
        tone: Tone::Caution,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎯",
        title: "Forensic Score™",
        description: "Get an instant 0-100 risk assessment with clear HIGH/MODERATE/LOW indicators and actionable insights.",
        delay_ms: 0,
    },
    Feature {
        icon: "🔍",
        title: "Line-by-Line Analysis",
        description: "Every fee, charge, and term examined against Texas regulations and industry standards.",
        delay_ms: 100,
    },
    Feature {
        icon: "💡",
        title: "Plain English Explanations",
        description: "Complex legal terms translated into clear, understandable language you can act on.",
        delay_ms: 200,
    },
    Feature {
        icon: "⚡",
        title: "60-Second Results",
        description: "Upload your documents and get comprehensive analysis in under a minute.",
        delay_ms: 300,
    },
    Feature {
        icon: "🛡️",
        title: "Bank-Level Security",
        description: "Your documents are encrypted, private, and can be deleted anytime you want.",
        delay_ms: 400,
    },
    Feature {
        icon: "📊",
        title: "Comparison Reports",
        description: "See how your costs compare to Texas averages and identify outliers instantly.",
        delay_ms: 500,
    },
];

pub const PROCESS: &[ProcessStepInfo] = &[
    ProcessStepInfo {
        number: "1",
        title: "Upload Your Documents",
        description: "Simply drag and drop your Closing Disclosure, Loan Estimate, or other closing documents. Our secure system accepts PDFs and images.",
    },
    ProcessStepInfo {
        number: "2",
        title: "AI Analysis Begins",
        description: "Our proprietary AI examines every line, comparing against Texas regulations, TRID rules, and our database of common errors and predatory practices.",
    },
    ProcessStepInfo {
        number: "3",
        title: "Get Your Action Plan",
        description: "Receive your Forensic Score, detailed findings, and step-by-step guidance on what to ask your lender or title company before signing.",
    },
];

pub const SAVINGS: &[SavingsExample] = &[
    SavingsExample {
        icon: "$",
        title: "Simultaneous Title Insurance",
        description: "When both owner's and lender's policies are issued together, the lender's should only cost $100.",
        example: &[
            "Owner's Title: $2,432",
            "Lender's Title charged: $2,178",
            "Should be: $100",
        ],
        savings: 2078,
    },
    SavingsExample {
        icon: "⚠",
        title: "POC Double-Charging",
        description: "Fees already paid outside closing sometimes appear again in final documents.",
        example: &[
            "Appraisal (POC): $550 already paid",
            "Credit Report (POC): $45 already paid",
            "Both charged again at closing",
        ],
        savings: 595,
    },
    SavingsExample {
        icon: "📋",
        title: "Seller's Costs to Buyer",
        description: "Texas contracts typically require sellers to pay owner's title policy.",
        example: &[
            "Owner's Policy: $2,174",
            "Contract: Seller pays (Para 6(A)(1))",
            "Incorrectly charged to buyer",
        ],
        savings: 2174,
    },
    SavingsExample {
        icon: "🔄",
        title: "Title Company Double-Dipping",
        description: "Title premiums include closing services, yet extra fees get added.",
        example: &[
            "Title Premium: $2,432 (includes services)",
            "Extra Settlement Fee: $395",
            "Extra Doc Prep: $150",
        ],
        savings: 545,
    },
];

pub const IMPACT_STATS: &[Stat] = &[
    Stat { end: 2500.0, prefix: "+", suffix: "", label: "Happy Homebuyers" },
    Stat { end: 6.2, prefix: "$", suffix: "M", label: "Total Saved" },
    Stat { end: 98.0, prefix: "", suffix: "%", label: "Satisfaction Rate" },
    Stat { end: 4.9, prefix: "", suffix: "/5", label: "Average Rating" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "CloseGuard found $2,800 in errors on my closing disclosure. The title company fixed everything before closing. Best $100 I ever spent!",
        author: "Sarah Mitchell",
        role: "First-time Homebuyer, Austin",
        rating: DEFAULT_RATING,
    },
    Testimonial {
        quote: "I almost paid for the owner's title policy that the seller should have covered. CloseGuard caught it and saved me $2,174.",
        author: "James Rodriguez",
        role: "Home Buyer, Houston",
        rating: DEFAULT_RATING,
    },
    Testimonial {
        quote: "The plain English explanations finally helped me understand what I was signing. No more confusion or anxiety at closing.",
        author: "Emily Chen",
        role: "Condo Buyer, Dallas",
        rating: DEFAULT_RATING,
    },
    Testimonial {
        quote: "They found duplicate charges and incorrect fee allocations. Saved $1,650 and gave me confidence at the closing table.",
        author: "Michael Thompson",
        role: "Investment Property, San Antonio",
        rating: DEFAULT_RATING,
    },
    Testimonial {
        quote: "The forensic score showed HIGH risk - turned out the lender made multiple errors. Fixed them all thanks to CloseGuard.",
        author: "Lisa Park",
        role: "Townhome Buyer, Fort Worth",
        rating: DEFAULT_RATING,
    },
    Testimonial {
        quote: "60 seconds to analyze what would have taken me hours to understand. Found issues I never would have caught myself.",
        author: "David Williams",
        role: "Second Home, Plano",
        rating: DEFAULT_RATING,
    },
];

pub const MODERN_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How quickly will I get my results?",
        answer: "Most analyses complete in under 60 seconds. Complex documents with multiple addenda may take up to 2 minutes. You'll receive an email as soon as your report is ready.",
    },
    FaqEntry {
        question: "What documents can I upload?",
        answer: "We accept Closing Disclosures, Loan Estimates, HUD-1 forms, Notes, Deeds of Trust, title commitments, and most other closing-related documents. Files can be PDFs or images (JPG, PNG).",
    },
    FaqEntry {
        question: "Is my information secure?",
        answer: "Absolutely. We use bank-level 256-bit encryption for all documents. Your files are stored securely and you can delete them anytime. We never share your information with third parties.",
    },
    FaqEntry {
        question: "What if I don't find any errors?",
        answer: "While 73% of documents contain errors, even a clean report provides peace of mind. You'll know you're getting a fair deal and can proceed with confidence. Plus, you'll have documentation if issues arise later.",
    },
    FaqEntry {
        question: "Can CloseGuard replace a real estate attorney?",
        answer: "No, CloseGuard is a tool to help you identify potential issues and understand your documents better. For legal advice specific to your situation, we recommend consulting with a qualified Texas real estate attorney.",
    },
    FaqEntry {
        question: "What's included in the free analysis?",
        answer: "The free analysis includes your Forensic Score, identification of major red flags, and basic guidance. Premium features include detailed line-by-line analysis, downloadable reports, and priority support.",
    },
    FaqEntry {
        question: "Do you work with specific lenders or title companies?",
        answer: "No, we're completely independent. We don't receive commissions or referral fees from any lenders, title companies, or real estate professionals. Our only goal is protecting homebuyers.",
    },
];

pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "Security", "API"]),
    ("Company", &["About", "Blog", "Careers", "Press"]),
    ("Support", &["Help Center", "Contact", "Privacy Policy", "Terms of Service"]),
];

// Classic page

pub const CLASSIC_STEPS: &[Step] = &[
    Step { order: "1", text: "Upload your home closing documents" },
    Step { order: "2", text: "Get your forensic score and red flags" },
    Step { order: "3", text: "Receive tailored homebuyer guidance" },
];

pub const CLASSIC_FEATURES: &[Highlight] = &[
    Highlight {
        title: "Forensic Score Dashboard",
        description: "A 0-100 mortgage risk score with clear HIGH / MODERATE / LOW badges, total red flags, critical issues, and your protection level at a glance.",
    },
    Highlight {
        title: "Context-Aware Analysis",
        description: "Compares promises from your lender or realtor to what is written in your closing documents to catch broken promises, cost shifting, and deceptive mortgage terms specific to Texas closings.",
    },
    Highlight {
        title: "Interactive Verification",
        description: "Quick Yes / No / Unsure checks validate each mortgage flag. A \"No\" confirms an issue and unlocks plain-English guidance on next steps.",
    },
    Highlight {
        title: "Texas Closing Cost Breakdown",
        description: "Line by line review of who should pay what closing costs, with alerts for unexpected buyer-paid items and comparisons to typical Texas real estate ranges.",
    },
    Highlight {
        title: "Simple Homebuyer Explanations",
        description: "Every mortgage red flag comes with: What it means, Why it matters, and What to do so you can act with confidence.",
    },
];

pub const CLASSIC_SAVINGS: &[SavingsExample] = &[
    SavingsExample {
        icon: "",
        title: "Texas Simultaneous Title Insurance",
        description: "When owner's and lender's title policies are issued together, the lender's policy should cost $100, not the full premium.",
        example: &[
            "Owner's Title Insurance: $2,432",
            "Lender's Title Insurance charged: $2,178",
            "Should be: $100",
        ],
        savings: 2078,
    },
    SavingsExample {
        icon: "",
        title: "POC (Paid Outside Closing) Double-Charging",
        description: "Fees you already paid (like appraisal or credit report) sometimes appear again on the final closing disclosure.",
        example: &[
            "Appraisal Fee (POC): $550 — already paid",
            "Credit Report (POC): $45 — already paid",
            "Both appear again in closing costs",
        ],
        savings: 595,
    },
    SavingsExample {
        icon: "",
        title: "Owner's Title Policy Charged to Buyer",
        description: "In Texas, sellers typically pay for the owner's title policy under standard TREC contracts. This often gets flipped in error.",
        example: &[
            "Owner's Title Policy charged to buyer: $2,174",
            "TREC Contract says seller pays (Paragraph 6(A)(1))",
        ],
        savings: 2174,
    },
    SavingsExample {
        icon: "",
        title: "Title Company Double-Dipping",
        description: "Texas title insurance premiums already include closing/settlement services, yet extra fees sometimes get added to your mortgage closing statement.",
        example: &[
            "Title Insurance Premium: $2,432 (includes services)",
            "Extra \"Settlement Fee\": $395",
            "Extra \"Title Doc Prep\": $150",
        ],
        savings: 545,
    },
];

pub const CLASSIC_TESTIMONIALS: &[Quote] = &[
    Quote {
        text: "CloseGuard gave me peace of mind during closing — it caught mortgage fees I did not even know existed!",
        author: "Sarah M.",
    },
    Quote {
        text: "The explanations were so clear, I finally understood what I was signing.",
        author: "John D.",
    },
];

pub const CLASSIC_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What documents do you support?",
        answer: "Closing Disclosure, Loan Estimate, Note, Deed of Trust, addenda, and most title/escrow fee sheets common in Texas real estate transactions.",
    },
    FaqEntry {
        question: "How do you keep my information safe?",
        answer: "Your documents stay private and under your control. We keep them safe, never share them, and you can delete them whenever you want.",
    },
    FaqEntry {
        question: "Do you replace a real estate lawyer?",
        answer: "No. CloseGuard flags mortgage risks and provides plain-English guidance so you can ask informed questions of your lender, realtor, or attorney.",
    },
    FaqEntry {
        question: "How accurate is the Forensic Score?",
        answer: "The Forensic Score is built to catch the mortgage issues that matter most — from hidden fees to unfair lending terms. It gives you a clear, easy-to-understand rating so you know when to move forward with confidence and when to ask more questions.",
    },
    FaqEntry {
        question: "How long does it take?",
        answer: "Most closing disclosure scans finish in under 60 seconds after you upload your documents.",
    },
    FaqEntry {
        question: "What does it cost?",
        answer: "Start with a free closing risk scan. Optional premium reviews and expert consultations are available.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_has_numbered_steps_in_order() {
        let numbers: Vec<_> = PROCESS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["1", "2", "3"]);
        let orders: Vec<_> = CLASSIC_STEPS.iter().map(|s| s.order).collect();
        assert_eq!(orders, ["1", "2", "3"]);
    }

    #[test]
    fn feature_delays_stagger_upwards() {
        assert!(FEATURES.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    }

    #[test]
    fn both_variants_list_the_same_savings_amounts() {
        let modern: Vec<_> = SAVINGS.iter().map(|s| s.savings).collect();
        let classic: Vec<_> = CLASSIC_SAVINGS.iter().map(|s| s.savings).collect();
        assert_eq!(modern, classic);
    }

    #[test]
    fn every_modern_testimonial_has_an_author_initial() {
        assert!(TESTIMONIALS.iter().all(|t| t.author.chars().next().is_some()));
    }
}
