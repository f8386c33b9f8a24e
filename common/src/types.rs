//! 赔案数据的类型定义
//!
//! CLI 与 Web(WASM) 共用:
//! - UploadedFile: 用户选择的图片
//! - PreviewHandle: 与图片一一对应的预览句柄
//! - ClaimFormState: 赔案处理单的表单状态
//! - OcrResult: OCR 接口返回的原始字段

use serde::{Deserialize, Deserializer, Serialize};

/// 已上传的图片
///
/// `blob` 的具体类型由平台决定：CLI 为字节数组，浏览器为 `web_sys::File`。
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<B = Vec<u8>> {
    pub name: String,
    pub size: u64,
    pub blob: B,
}

impl<B> UploadedFile<B> {
    pub fn new(name: impl Into<String>, size: u64, blob: B) -> Self {
        Self {
            name: name.into(),
            size,
            blob,
        }
    }

    /// 去重用的身份: (文件名, 字节数)
    pub fn identity(&self) -> (&str, u64) {
        (self.name.as_str(), self.size)
    }
}

impl UploadedFile<Vec<u8>> {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self::new(name, size, bytes)
    }
}

/// 预览句柄
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewHandle<H> {
    pub name: String,
    pub handle: H,
}

/// OCR 返回的单个字段值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(serde_json::Number),
}

impl FieldValue {
    /// 作为单值字段使用时的文本（空白视为缺失，原值不做修剪）
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) if s.trim().is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::List(items) if items.iter().all(|s| s.trim().is_empty()) => None,
            FieldValue::List(items) => Some(items.join("、")),
            FieldValue::Number(n) => Some(n.to_string()),
        }
    }

    /// 作为列表字段使用时的值
    ///
    /// 非空列表原样使用；空列表视为缺失；单值包装为一个元素的列表。
    pub fn as_list(&self) -> Option<Vec<String>> {
        match self {
            FieldValue::List(items) if items.is_empty() => None,
            FieldValue::List(items) => Some(items.clone()),
            scalar => scalar.as_text().map(|s| vec![s]),
        }
    }
}

/// 单个字段无法识别时按缺失处理，不影响其余字段
fn lenient<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(field) => Ok(Some(field)),
        Err(e) => {
            tracing::warn!(error = %e, "忽略无法识别的字段值");
            Ok(None)
        }
    }
}

/// 赔案处理单的表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimFormState {
    // 身份证
    pub id_number: String,          // 身份证号
    pub insured_person: String,     // 被保险人

    // 银行卡
    pub bank_name: String,          // 开户行
    pub card_number: String,        // 银行账号

    // 系统截图
    pub policy_number: String,      // 保单号
    pub claim_number: String,       // 报案号
    pub insured_name: String,       // 系统中的被保险人名称
    pub insurance_subject: Vec<String>, // 保险标的
    pub coverage_period: String,    // 保险期间
    pub incident_date: String,      // 出险日期
    pub incident_location: String,  // 出险地点
    pub report_time: String,        // 报案时间
    pub inspection_time: String,    // 查勘时间
    pub inspection_method: String,  // 查勘方式
    pub estimated_loss: String,     // 估损金额（元）
    pub incident_cause: String,     // 出险原因
    pub remarks: String,            // 备注
    pub phone: String,              // 联系电话
}

impl ClaimFormState {
    /// 带默认查勘方式的初始表单
    pub fn with_inspection_method(method: impl Into<String>) -> Self {
        Self {
            inspection_method: method.into(),
            ..Default::default()
        }
    }
}

/// OCR 接口返回值
///
/// 任意字段都可能缺失；未知字段忽略，类型不符的字段视为缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrResult {
    #[serde(deserialize_with = "lenient")]
    pub id_number: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub insured_person: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub bank_name: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub card_number: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub policy_number: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub claim_number: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub insured_name: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub insurance_subject: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub coverage_period: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub incident_date: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub incident_location: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub report_time: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub inspection_time: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub inspection_method: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_loss: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub incident_cause: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub remarks: Option<FieldValue>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<FieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_form_default() {
        let form = ClaimFormState::default();
        assert_eq!(form.policy_number, "");
        assert!(form.insurance_subject.is_empty());
        assert_eq!(form.inspection_method, "");
    }

    #[test]
    fn test_claim_form_serialize_camel_case() {
        let form = ClaimFormState {
            policy_number: "P123".to_string(),
            insurance_subject: vec!["猪".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&form).expect("序列化失败");
        assert!(json.contains("\"policyNumber\":\"P123\""));
        assert!(json.contains("\"insuranceSubject\":[\"猪\"]"));
        assert!(json.contains("\"idNumber\":\"\""));
    }

    #[test]
    fn test_claim_form_deserialize_missing_fields() {
        let json = r#"{"claimNumber": "C001"}"#;
        let form: ClaimFormState = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(form.claim_number, "C001");
        assert_eq!(form.bank_name, "");
    }

    #[test]
    fn test_ocr_result_mixed_values() {
        let json = r#"{
            "policyNumber": "P123",
            "insuranceSubject": ["猪", "牛"],
            "estimatedLoss": 1200,
            "pigEartags": ["ignored"]
        }"#;

        let result: OcrResult = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(result.policy_number, Some(FieldValue::Text("P123".to_string())));
        assert_eq!(
            result.insurance_subject.as_ref().and_then(FieldValue::as_list),
            Some(vec!["猪".to_string(), "牛".to_string()])
        );
        assert_eq!(
            result.estimated_loss.as_ref().and_then(FieldValue::as_text),
            Some("1200".to_string())
        );
        assert!(result.claim_number.is_none());
    }

    #[test]
    fn test_ocr_result_null_is_absent() {
        let result: OcrResult = serde_json::from_str(r#"{"phone": null}"#).expect("反序列化失败");
        assert!(result.phone.is_none());
    }

    #[test]
    fn test_field_value_blank_text_is_absent() {
        assert_eq!(FieldValue::Text("   ".to_string()).as_text(), None);
        assert_eq!(FieldValue::List(vec![]).as_list(), None);
        assert_eq!(FieldValue::List(vec![" ".to_string()]).as_text(), None);
    }

    #[test]
    fn test_field_value_kept_untrimmed() {
        assert_eq!(FieldValue::Text(" P1 ".to_string()).as_text(), Some(" P1 ".to_string()));
        assert_eq!(
            FieldValue::List(vec![" 猪 ".to_string(), String::new()]).as_list(),
            Some(vec![" 猪 ".to_string(), String::new()])
        );
    }

    #[test]
    fn test_ocr_result_bad_field_is_absent() {
        let json = r#"{"policyNumber":"P1","insuranceSubject":["猪",null],"phone":true}"#;
        let result: OcrResult = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(result.policy_number, Some(FieldValue::Text("P1".to_string())));
        assert!(result.insurance_subject.is_none());
        assert!(result.phone.is_none());
    }

    #[test]
    fn test_field_value_scalar_wraps_into_list() {
        assert_eq!(
            FieldValue::Text("猪".to_string()).as_list(),
            Some(vec!["猪".to_string()])
        );
    }

    #[test]
    fn test_uploaded_file_identity() {
        let file = UploadedFile::from_bytes("id.jpg", vec![1, 2, 3]);
        assert_eq!(file.identity(), ("id.jpg", 3));
    }
}
