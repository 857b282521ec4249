// ============================================================================
// ONBOARDING DE RIDERS - Workflow de revisión de solicitudes
// ============================================================================
// El backend solo guarda el registro plano de la solicitud; este módulo lo
// transforma en el view model que pinta el panel: paso actual, porcentaje de
// progreso, 8 huecos de documentación y los módulos de formación.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ListFilters;
use super::rider::{RiderStatus, VehicleDetails};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
    Expired,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

/// Los 8 huecos fijos de documentación de toda solicitud
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    NationalId,
    DriversLicence,
    VehicleRegistration,
    InsuranceCertificate,
    ProofOfAddress,
    PassportPhoto,
    PoliceClearance,
    MedicalCertificate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 8] = [
        DocumentKind::NationalId,
        DocumentKind::DriversLicence,
        DocumentKind::VehicleRegistration,
        DocumentKind::InsuranceCertificate,
        DocumentKind::ProofOfAddress,
        DocumentKind::PassportPhoto,
        DocumentKind::PoliceClearance,
        DocumentKind::MedicalCertificate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::NationalId => "National ID",
            DocumentKind::DriversLicence => "Driver's licence",
            DocumentKind::VehicleRegistration => "Vehicle registration",
            DocumentKind::InsuranceCertificate => "Insurance certificate",
            DocumentKind::ProofOfAddress => "Proof of address",
            DocumentKind::PassportPhoto => "Passport photo",
            DocumentKind::PoliceClearance => "Police clearance",
            DocumentKind::MedicalCertificate => "Medical certificate",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DocumentSlot {
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub required: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TrainingModule {
    pub id: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub status: TrainingStatus,
}

impl TrainingModule {
    /// Plan de formación fijo, en orden; el último módulo es opcional
    pub fn standard_plan() -> Vec<TrainingModule> {
        [
            ("platform_basics", "Platform basics", true),
            ("safety_road_rules", "Safety & road rules", true),
            ("parcel_handling", "Parcel handling", true),
            ("customer_service", "Customer service", true),
            ("app_navigation", "App navigation", false),
        ]
        .into_iter()
        .map(|(id, name, required)| TrainingModule {
            id,
            name,
            required,
            status: TrainingStatus::NotStarted,
        })
        .collect()
    }
}

/// Pasos del workflow, en orden. Solo se avanza hacia delante; el rechazo
/// es alcanzable desde cualquier paso.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Submitted,
    DocumentReview,
    BackgroundCheck,
    Training,
    FinalReview,
    Approved,
    Rejected,
}

impl OnboardingStep {
    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::Submitted => "Submitted",
            OnboardingStep::DocumentReview => "Document review",
            OnboardingStep::BackgroundCheck => "Background check",
            OnboardingStep::Training => "Training",
            OnboardingStep::FinalReview => "Final review",
            OnboardingStep::Approved => "Approved",
            OnboardingStep::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OnboardingStep::Approved | OnboardingStep::Rejected)
    }
}

/// Sub-registro de documento tal como llega del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DocumentRecord {
    pub kind: DocumentKind,
    pub status: DocumentStatus,
}

/// Sub-registro de formación tal como llega del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TrainingRecord {
    pub module: String,
    pub status: TrainingStatus,
}

/// Registro plano de la solicitud en el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PendingRiderApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub vehicle_details: VehicleDetails,
    pub national_id: String,
    #[serde(default)]
    pub is_verified: bool,
    pub status: RiderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub training: Vec<TrainingRecord>,
    #[serde(default)]
    pub background_check_passed: Option<bool>,
}

/// Motivo por el que una solicitud todavía no puede aprobarse
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OnboardingBlocker {
    DocumentsIncomplete,
    BackgroundCheckMissing,
    TrainingIncomplete,
    NotInFinalReview,
}

impl std::fmt::Display for OnboardingBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnboardingBlocker::DocumentsIncomplete => {
                write!(f, "Required documents are not verified yet")
            }
            OnboardingBlocker::BackgroundCheckMissing => {
                write!(f, "Background check has not passed yet")
            }
            OnboardingBlocker::TrainingIncomplete => {
                write!(f, "Required training modules are not completed")
            }
            OnboardingBlocker::NotInFinalReview => {
                write!(f, "Application is not in final review")
            }
        }
    }
}

/// View model de una solicitud en el panel de onboarding
#[derive(Clone, PartialEq, Debug)]
pub struct OnboardingApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub vehicle_details: VehicleDetails,
    pub created_at: DateTime<Utc>,
    pub step: OnboardingStep,
    pub progress: u8,
    pub documents: Vec<DocumentSlot>,
    pub training: Vec<TrainingModule>,
    pub background_check_passed: Option<bool>,
}

impl OnboardingApplication {
    pub fn from_record(record: &PendingRiderApplication) -> Self {
        let documents = merge_documents(record);
        let training = merge_training(record);
        let step = derive_step(
            record.status,
            &documents,
            record.background_check_passed,
            &training,
        );
        let progress = progress_percent(step, &documents, &training);

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            national_id: record.national_id.clone(),
            vehicle_details: record.vehicle_details.clone(),
            created_at: record.created_at,
            step,
            progress,
            documents,
            training,
            background_check_passed: record.background_check_passed,
        }
    }

    pub fn current_step_label(&self) -> &'static str {
        self.step.label()
    }

    pub fn documents_complete(&self) -> bool {
        self.documents
            .iter()
            .filter(|slot| slot.required)
            .all(|slot| slot.status == DocumentStatus::Verified)
    }

    pub fn required_training_complete(&self) -> bool {
        self.training
            .iter()
            .filter(|module| module.required)
            .all(|module| module.status == TrainingStatus::Completed)
    }

    /// Comprobación estricta del workflow. El hook de pendientes deja
    /// aprobar como atajo desde cualquier paso (el backend manda); la UI
    /// usa esto para etiquetar el botón.
    pub fn approval_eligibility(&self) -> Result<(), OnboardingBlocker> {
        if !self.documents_complete() {
            return Err(OnboardingBlocker::DocumentsIncomplete);
        }
        if self.background_check_passed != Some(true) {
            return Err(OnboardingBlocker::BackgroundCheckMissing);
        }
        if !self.required_training_complete() {
            return Err(OnboardingBlocker::TrainingIncomplete);
        }
        if self.step != OnboardingStep::FinalReview {
            return Err(OnboardingBlocker::NotInFinalReview);
        }
        Ok(())
    }
}

/// Rellena los 8 huecos fijos con lo que reporta el backend. Si el backend
/// todavía no manda sub-registros, el único dato disponible es
/// `is_verified`, que cubre el documento de identidad.
fn merge_documents(record: &PendingRiderApplication) -> Vec<DocumentSlot> {
    DocumentKind::ALL
        .iter()
        .map(|kind| {
            let reported = record
                .documents
                .iter()
                .find(|doc| doc.kind == *kind)
                .map(|doc| doc.status);
            let fallback = if *kind == DocumentKind::NationalId && record.is_verified {
                DocumentStatus::Verified
            } else {
                DocumentStatus::Pending
            };
            DocumentSlot {
                kind: *kind,
                status: reported.unwrap_or(fallback),
                required: true,
            }
        })
        .collect()
}

fn merge_training(record: &PendingRiderApplication) -> Vec<TrainingModule> {
    let mut plan = TrainingModule::standard_plan();
    for module in &mut plan {
        if let Some(reported) = record
            .training
            .iter()
            .find(|rec| rec.module == module.id)
        {
            module.status = reported.status;
        }
    }
    plan
}

/// Deriva el paso actual a partir del sub-estado. El estado del backend
/// gana en los terminales; el resto sale de documentos → background check
/// → formación → revisión final.
fn derive_step(
    status: RiderStatus,
    documents: &[DocumentSlot],
    background_check_passed: Option<bool>,
    training: &[TrainingModule],
) -> OnboardingStep {
    match status {
        RiderStatus::Rejected => return OnboardingStep::Rejected,
        RiderStatus::Active => return OnboardingStep::Approved,
        _ => {}
    }

    let none_reviewed = documents
        .iter()
        .all(|slot| slot.status == DocumentStatus::Pending);
    if none_reviewed {
        return OnboardingStep::Submitted;
    }

    let documents_done = documents
        .iter()
        .filter(|slot| slot.required)
        .all(|slot| slot.status == DocumentStatus::Verified);
    if !documents_done {
        return OnboardingStep::DocumentReview;
    }

    if background_check_passed != Some(true) {
        return OnboardingStep::BackgroundCheck;
    }

    let training_done = training
        .iter()
        .filter(|module| module.required)
        .all(|module| module.status == TrainingStatus::Completed);
    if !training_done {
        return OnboardingStep::Training;
    }

    OnboardingStep::FinalReview
}

/// Mapa paso → porcentaje. Documentación y formación escalan dentro de su
/// tramo según los sub-registros verificados/completados.
fn progress_percent(
    step: OnboardingStep,
    documents: &[DocumentSlot],
    training: &[TrainingModule],
) -> u8 {
    match step {
        OnboardingStep::Submitted => 25,
        OnboardingStep::DocumentReview => {
            let total = documents.len().max(1) as u32;
            let verified = documents
                .iter()
                .filter(|slot| slot.status == DocumentStatus::Verified)
                .count() as u32;
            (25 + 25 * verified / total) as u8
        }
        OnboardingStep::BackgroundCheck => 60,
        OnboardingStep::Training => {
            let required: Vec<_> = training.iter().filter(|m| m.required).collect();
            let total = required.len().max(1) as u32;
            let completed = required
                .iter()
                .filter(|m| m.status == TrainingStatus::Completed)
                .count() as u32;
            (65 + 25 * completed / total) as u8
        }
        OnboardingStep::FinalReview => 95,
        OnboardingStep::Approved | OnboardingStep::Rejected => 100,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PendingFilters {
    pub page: u32,
    pub limit: u32,
}

impl Default for PendingFilters {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl ListFilters for PendingFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_record() -> PendingRiderApplication {
        PendingRiderApplication {
            id: "app-1".to_string(),
            name: "Marta Ríos".to_string(),
            email: "marta@example.com".to_string(),
            vehicle_details: VehicleDetails::default(),
            national_id: "X1234567".to_string(),
            is_verified: false,
            status: RiderStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
            documents: Vec::new(),
            training: Vec::new(),
            background_check_passed: None,
        }
    }

    fn all_documents_verified() -> Vec<DocumentRecord> {
        DocumentKind::ALL
            .iter()
            .map(|kind| DocumentRecord {
                kind: *kind,
                status: DocumentStatus::Verified,
            })
            .collect()
    }

    fn all_required_training_completed() -> Vec<TrainingRecord> {
        TrainingModule::standard_plan()
            .into_iter()
            .filter(|m| m.required)
            .map(|m| TrainingRecord {
                module: m.id.to_string(),
                status: TrainingStatus::Completed,
            })
            .collect()
    }

    #[test]
    fn fresh_application_is_submitted_at_25() {
        let app = OnboardingApplication::from_record(&base_record());
        assert_eq!(app.step, OnboardingStep::Submitted);
        assert_eq!(app.progress, 25);
        assert_eq!(app.documents.len(), 8);
    }

    #[test]
    fn verified_identity_moves_into_document_review() {
        let mut record = base_record();
        record.is_verified = true;
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::DocumentReview);
        // 1 de 8 documentos verificados: 25 + 25/8
        assert_eq!(app.progress, 28);
    }

    #[test]
    fn document_review_progress_scales_with_verified_slots() {
        let mut record = base_record();
        record.documents = DocumentKind::ALL[..4]
            .iter()
            .map(|kind| DocumentRecord {
                kind: *kind,
                status: DocumentStatus::Verified,
            })
            .collect();
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::DocumentReview);
        assert_eq!(app.progress, 37); // 25 + 25*4/8
    }

    #[test]
    fn rejected_document_keeps_application_in_review() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        record.documents[3].status = DocumentStatus::Rejected;
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::DocumentReview);
    }

    #[test]
    fn documents_done_waits_on_background_check() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::BackgroundCheck);
        assert_eq!(app.progress, 60);
    }

    #[test]
    fn training_progress_scales_with_completed_required_modules() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        record.background_check_passed = Some(true);
        record.training = vec![
            TrainingRecord {
                module: "platform_basics".to_string(),
                status: TrainingStatus::Completed,
            },
            TrainingRecord {
                module: "safety_road_rules".to_string(),
                status: TrainingStatus::Completed,
            },
        ];
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::Training);
        assert_eq!(app.progress, 77); // 65 + 25*2/4
    }

    #[test]
    fn optional_module_does_not_gate_final_review() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        record.background_check_passed = Some(true);
        record.training = all_required_training_completed();
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::FinalReview);
        assert_eq!(app.progress, 95);
        assert!(app
            .training
            .iter()
            .any(|m| !m.required && m.status == TrainingStatus::NotStarted));
    }

    #[test]
    fn complete_application_is_approval_eligible() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        record.background_check_passed = Some(true);
        record.training = all_required_training_completed();
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.approval_eligibility(), Ok(()));
    }

    #[test]
    fn unstarted_required_module_blocks_approval() {
        let mut record = base_record();
        record.documents = all_documents_verified();
        record.background_check_passed = Some(true);
        record.training = all_required_training_completed();
        record.training.remove(0); // platform_basics vuelve a not_started
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(
            app.approval_eligibility(),
            Err(OnboardingBlocker::TrainingIncomplete)
        );
    }

    #[test]
    fn pending_documents_block_approval() {
        let app = OnboardingApplication::from_record(&base_record());
        assert_eq!(
            app.approval_eligibility(),
            Err(OnboardingBlocker::DocumentsIncomplete)
        );
    }

    #[test]
    fn backend_terminal_status_wins() {
        let mut record = base_record();
        record.status = RiderStatus::Rejected;
        let app = OnboardingApplication::from_record(&record);
        assert_eq!(app.step, OnboardingStep::Rejected);
        assert_eq!(app.progress, 100);
        assert_eq!(
            app.approval_eligibility(),
            Err(OnboardingBlocker::DocumentsIncomplete)
        );
    }
}
