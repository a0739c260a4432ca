//! ISO/IEC 27001 information security management: clauses 4-10.

use crate::CatalogueEntry;

#[rustfmt::skip]
pub const CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry::new("4.1", "External and internal issues affecting the organization and its information security management system are identified and reviewed."),
    CatalogueEntry::new("4.2", "Information security needs and expectations of relevant interested parties are clearly understood and documented."),
    CatalogueEntry::new("4.3", "The scope of the information security management system is defined."),
    CatalogueEntry::new("4.4", "The ISMS is established, implemented, maintained, and continually improved."),
    CatalogueEntry::new("5.1", "Leadership ensures that the ISMS supports continual improvement and is adequately resourced."),
    CatalogueEntry::new("5.2", "The documented information security policy is relevant and communicated."),
    CatalogueEntry::new("5.3", "Responsibilities and authorities for the ISMS are assigned and understood."),
    CatalogueEntry::new("6.1", "Risks and opportunities are identified and managed using a risk assessment process, a risk treatment process, and appropriate controls (SoA)."),
    CatalogueEntry::new("6.2", "The information security objectives are defined, communicated, and measurable as appropriate."),
    CatalogueEntry::new("6.3", "Changes to the ISMS are managed in a planned manner."),
    CatalogueEntry::new("7.1", "Resources required for the ISMS are determined and provided."),
    CatalogueEntry::new("7.2", "Individuals are competent; records of competence are maintained."),
    CatalogueEntry::new("7.3", "Individuals are aware of the ISMS and their role in achieving information security objectives."),
    CatalogueEntry::new("7.4", "Internal and external communication requirements are defined."),
    CatalogueEntry::new("7.5", "Documented information for the ISMS is properly approved, controlled, and maintained."),
    CatalogueEntry::new("8.1", "Processes required to meet information security objectives are planned, implemented, and controlled."),
    CatalogueEntry::new("8.2", "Information security risk assessment is done regularly and documented according to clause 6.1.2."),
    CatalogueEntry::new("8.3", "Risk treatment plans are executed according to clause 6.1.3."),
    CatalogueEntry::new("9.1", "Performance of the ISMS is monitored and evaluated according to defined metrics."),
    CatalogueEntry::new("9.2", "Internal audits verify the organization's conformity and the ISMS suitability, effectiveness, and adequacy."),
    CatalogueEntry::new("9.3", "Periodic management reviews of the ISMS performance drive continual improvement."),
    CatalogueEntry::new("10.1", "Continual improvement of the ISMS is maintained."),
    CatalogueEntry::new("10.2", "Nonconformities are managed and corrective actions are implemented."),
];
