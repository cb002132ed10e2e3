//! Static lookup tables the pipeline consults: sector benchmarks, stage
//! tables, narrative templates, investor archetypes and roadmap playbooks.
//!
//! A [`KnowledgeBase`] is built once and only ever read. Stages receive it
//! by reference; [`KnowledgeBase::standard`] returns the shared built-in
//! instance.

pub mod investors;
pub mod narratives;
pub mod playbooks;
pub mod sectors;
pub mod stages;

use once_cell::sync::Lazy;

pub use investors::{InvestorArchetype, InvestorProfile, InvestorTable};
pub use narratives::{NarrativeTable, NarrativeTemplate, ValueFormat};
pub use playbooks::{AlternativePathTemplate, MoveTemplate, Playbook, PlaybookTable, Viability};
pub use sectors::{SectorBenchmark, SectorTable};
pub use stages::{OrganizationTable, StageTable};

static STANDARD: Lazy<KnowledgeBase> = Lazy::new(KnowledgeBase::build_standard);

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub sectors: SectorTable,
    pub stages: StageTable,
    pub organizations: OrganizationTable,
    pub narratives: NarrativeTable,
    pub investors: InvestorTable,
    pub playbooks: PlaybookTable,
}

impl KnowledgeBase {
    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD
    }

    fn build_standard() -> Self {
        Self {
            sectors: SectorTable::standard(),
            stages: StageTable::standard(),
            organizations: OrganizationTable::standard(),
            narratives: NarrativeTable::standard(),
            investors: InvestorTable::standard(),
            playbooks: PlaybookTable::standard(),
        }
    }
}
