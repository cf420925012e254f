//! `cafe-priority` — the scheduling policy shared by both execution paths.
//!
//! The live scheduler and the discrete-event simulator both rank waiting
//! orders with [`score`]; neither carries a private copy of the formula.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`scorer`] | `score`, `rescore`, `Priority`, `ScoreBreakdown`           |
//! | [`sla`]    | thresholds, `check_sla`, `SlaAlert`, `queue_eta_secs`      |

pub mod scorer;
pub mod sla;


pub use cafe_core::PriorityReason;
pub use scorer::{Priority, ScoreBreakdown, rescore, score, urgency_component};
pub use sla::{
    SLA_BREACH_SECS, SLA_WARNING_SECS, SlaAlert, SlaAlertKind, URGENCY_THRESHOLD_SECS,
    check_sla, queue_eta_secs, violates_sla,
};
