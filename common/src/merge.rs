//! OCR 结果合并到表单
//!
//! 规则: 返回值非空则覆盖，否则保留原值。不会失败，也没有副作用。

use crate::types::{ClaimFormState, FieldValue, OcrResult};

fn fill(current: &str, incoming: Option<&FieldValue>) -> String {
    incoming
        .and_then(FieldValue::as_text)
        .unwrap_or_else(|| current.to_string())
}

fn fill_list(current: &[String], incoming: Option<&FieldValue>) -> Vec<String> {
    incoming
        .and_then(FieldValue::as_list)
        .unwrap_or_else(|| current.to_vec())
}

/// 将 OCR 结果合并进当前表单，返回新的表单
pub fn merge(current: &ClaimFormState, result: &OcrResult) -> ClaimFormState {
    ClaimFormState {
        id_number: fill(&current.id_number, result.id_number.as_ref()),
        insured_person: fill(&current.insured_person, result.insured_person.as_ref()),
        bank_name: fill(&current.bank_name, result.bank_name.as_ref()),
        card_number: fill(&current.card_number, result.card_number.as_ref()),
        policy_number: fill(&current.policy_number, result.policy_number.as_ref()),
        claim_number: fill(&current.claim_number, result.claim_number.as_ref()),
        insured_name: fill(&current.insured_name, result.insured_name.as_ref()),
        insurance_subject: fill_list(&current.insurance_subject, result.insurance_subject.as_ref()),
        coverage_period: fill(&current.coverage_period, result.coverage_period.as_ref()),
        incident_date: fill(&current.incident_date, result.incident_date.as_ref()),
        incident_location: fill(&current.incident_location, result.incident_location.as_ref()),
        report_time: fill(&current.report_time, result.report_time.as_ref()),
        inspection_time: fill(&current.inspection_time, result.inspection_time.as_ref()),
        inspection_method: fill(&current.inspection_method, result.inspection_method.as_ref()),
        estimated_loss: fill(&current.estimated_loss, result.estimated_loss.as_ref()),
        incident_cause: fill(&current.incident_cause, result.incident_cause.as_ref()),
        remarks: fill(&current.remarks, result.remarks.as_ref()),
        phone: fill(&current.phone, result.phone.as_ref()),
    }
}
