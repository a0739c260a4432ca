//! ISO 7101 healthcare quality management: clauses 4-10, 34 sub-clauses.

use crate::CatalogueEntry;

#[rustfmt::skip]
pub const CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry::new("4.1", "Identified the external and internal issues that affect the organization and the healthcare quality management system."),
    CatalogueEntry::new("4.2", "Clear understanding of the needs and expectations of interested parties."),
    CatalogueEntry::new("4.3", "The scope of the management system for quality is clearly determined."),
    CatalogueEntry::new("4.4", "The MS (management system) for quality is built and maintained in its entirety."),
    CatalogueEntry::new("5.1", "Ensuring that the MS for quality supports continual improvement."),
    CatalogueEntry::new("5.2", "The documented Healthcare Quality Policy containing the healthcare objectives is relevant to the organization."),
    CatalogueEntry::new("5.3", "Responsibilities and levels of authority for individuals responsible for the HQMS must be understood."),
    CatalogueEntry::new("5.4", "Service user focus - Has management ensured service users' rights are clearly known?"),
    CatalogueEntry::new("5.5", "The healthcare organization ensures access to care in accordance with its defined mandate and applicable laws and regulations."),
    CatalogueEntry::new("6.1", "Actions to address risks and opportunities (includes: documenting risks and opportunities from context & interested parties, shared risk culture, and documented system to identify risks/opportunities)."),
    CatalogueEntry::new("6.2", "The healthcare quality objectives and plans to achieve them."),
    CatalogueEntry::new("6.3", "Changes to the HQMS are determined and managed in a planned manner."),
    CatalogueEntry::new("7.1", "The organization has determined and provided the resources (people, budget, infrastructure) required for the HQMS."),
    CatalogueEntry::new("7.2", "Individuals are competent, and records are kept as evidence."),
    CatalogueEntry::new("7.3", "Individuals are aware of the HQMS, the objectives applicable to their roles, and their contribution to the HQMS."),
    CatalogueEntry::new("7.4", "The organization must determine what to communicate about the HQMS internally and externally."),
    CatalogueEntry::new("7.5", "Documented information: consideration of level of documentation, creation/updating, controls (title/date/author/ref), protection of information systems, electronic info control, and definition of clinical vs non-clinical records."),
    CatalogueEntry::new("8.1", "Maintain processes to run the HQMS and implement actions identified in Clause 6."),
    CatalogueEntry::new("8.2", "Healthcare facilities management and maintenance; contingencies for facilities and services; proper use and safety of equipment."),
    CatalogueEntry::new("8.3", "Waste management, waste reduction planning, and environmental responsibility."),
    CatalogueEntry::new("8.4", "Responsible handling and storage of materials."),
    CatalogueEntry::new("8.5", "Service user belongings (processes to manage/return items)."),
    CatalogueEntry::new("8.6", "Consideration and safe adoption of emerging technologies."),
    CatalogueEntry::new("8.7", "Service design taking a user-centric approach."),
    CatalogueEntry::new("8.8", "Ensure that clinical and non-clinical externally provided products and services conform to organizational requirements."),
    CatalogueEntry::new("8.9", "Provision of services (delivery and management of services)."),
    CatalogueEntry::new("8.10", "People-centred care: inclusivity, diversity, health literacy, service user experience and assessment, compassionate care, cultural competence training, health literacy for workforce/service users, co-production, and workforce wellbeing."),
    CatalogueEntry::new("8.11", "Healthcare is delivered ethically, respectfully, and in accordance with professional standards."),
    CatalogueEntry::new("8.12", "Patient safety cluster (patient safety culture; identification processes; medication management; surgical safety; IPC program; prevention of falls, pressure ulcers, thromboembolism; diagnostic safety; blood transfusion safety)."),
    CatalogueEntry::new("9.1", "Monitoring, measurement, analysis and evaluation of the HQMS, including healthcare quality indicators, methods, and use of results to inform strategic quality directions."),
    CatalogueEntry::new("9.2", "Internal audit and internal audit programme to verify conformity and performance of the HQMS."),
    CatalogueEntry::new("9.3", "Management review (inputs, outputs and use of results to drive improvement)."),
    CatalogueEntry::new("10.1", "Continual improvement of the HQMS."),
    CatalogueEntry::new("10.2", "Nonconformity & corrective action and management of nonconformity and corrective action."),
];
