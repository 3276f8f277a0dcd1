pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{
    AccountingMethod, BreakdownLine, CalculationExplanation, Gas, NoteCard, Quantity,
    SectionBreakdown, SectionKind, SourceBreakdown,
};

pub use generator::BreakdownGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
