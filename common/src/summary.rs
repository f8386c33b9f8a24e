//! 赔案处理单摘要
//!
//! 完全由 `ClaimFormState` 推导，无副作用，任何时候都可以重新生成。
//! CLI 输出文本，浏览器渲染同一个模型。

use crate::types::ClaimFormState;
use std::fmt::Write as _;

pub const SUMMARY_TITLE: &str = "养殖业保险简易赔案处理单";

/// 空值占位符
pub const PLACEHOLDER: &str = "—";

const BLANK_DATE: &str = "___年___月___日";
const BLANK_CAUSE: &str = "___________";
const BLANK_HEADCOUNT: &str = "___只/头";

/// 单个只读字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
}

impl SummaryField {
    fn new(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.trim().to_string(),
        }
    }

    /// 显示用的值（空则为占位符）
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            PLACEHOLDER
        } else {
            &self.value
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// 叙述段落中的片段，`emphasis` 用于加粗显示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativePart {
    pub text: String,
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Fields(Vec<SummaryField>),
    Narrative(Vec<NarrativePart>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSummary {
    pub title: &'static str,
    pub sections: Vec<SummarySection>,
}

fn or_blank(value: &str, blank: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        blank.to_string()
    } else {
        value.to_string()
    }
}

fn plain(text: &str) -> NarrativePart {
    NarrativePart {
        text: text.to_string(),
        emphasis: false,
    }
}

fn strong(text: String) -> NarrativePart {
    NarrativePart {
        text,
        emphasis: true,
    }
}

/// 出险原因及经过
pub fn incident_narrative(form: &ClaimFormState) -> Vec<NarrativePart> {
    vec![
        strong(or_blank(&form.inspection_time, BLANK_DATE)),
        plain("，被保险人饲养的"),
        strong(BLANK_HEADCOUNT.to_string()),
        plain("标的死亡，报案后我司查勘人员协同畜牧兽医站工作人员到现场查勘。"),
        plain("经兽医对标的死亡原因进行诊断，该标的是因"),
        strong(or_blank(&form.incident_cause, BLANK_CAUSE)),
        plain("导致死亡。"),
    ]
}

/// 表单 → 摘要
///
/// 被保险人在多个分区出现，均读取同一个 `insured_person` 字段。
pub fn render_summary(form: &ClaimFormState) -> ClaimSummary {
    let subjects = form
        .insurance_subject
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("、");

    let sections = vec![
        SummarySection {
            title: "案件基本信息",
            body: SectionBody::Fields(vec![
                SummaryField::new("保单号", &form.policy_number),
                SummaryField::new("报案号", &form.claim_number),
                SummaryField::new("被保险人", &form.insured_person),
                SummaryField::new("保险标的", &subjects),
                SummaryField::new("保险期间", &form.coverage_period),
                SummaryField::new("出险日期", &form.incident_date),
                SummaryField::new("出险地点", &form.incident_location),
                SummaryField::new("报案时间", &form.report_time),
            ]),
        },
        SummarySection {
            title: "查勘定损情况",
            body: SectionBody::Fields(vec![
                SummaryField::new("查勘时间", &form.inspection_time),
                SummaryField::new("查勘方式", &form.inspection_method),
            ]),
        },
        SummarySection {
            title: "出险原因及经过",
            body: SectionBody::Narrative(incident_narrative(form)),
        },
        SummarySection {
            title: "赔款支付信息",
            body: SectionBody::Fields(vec![
                SummaryField::new("户名", &form.insured_person),
                SummaryField::new("身份证号", &form.id_number),
                SummaryField::new("开户行", &form.bank_name),
                SummaryField::new("银行账号", &form.card_number),
                SummaryField::new("联系电话", &form.phone),
            ]),
        },
        SummarySection {
            title: "防疫及死亡原因核实情况",
            body: SectionBody::Fields(vec![
                SummaryField::new("被保险人", &form.insured_person),
                SummaryField::new("估损金额（元）", &form.estimated_loss),
                SummaryField::new("出险原因", &form.incident_cause),
            ]),
        },
    ];

    ClaimSummary {
        title: SUMMARY_TITLE,
        sections,
    }
}

impl ClaimSummary {
    /// 全部字段（不含叙述段落）
    pub fn fields(&self) -> impl Iterator<Item = &SummaryField> {
        self.sections.iter().flat_map(|s| match &s.body {
            SectionBody::Fields(fields) => fields.as_slice(),
            SectionBody::Narrative(_) => &[][..],
        })
    }

    /// 纯文本输出，每个字段一行 `标签: 值`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "【{}】", section.title);
            match &section.body {
                SectionBody::Fields(fields) => {
                    for field in fields {
                        let _ = writeln!(out, "  {}: {}", field.label, field.display_value());
                    }
                }
                SectionBody::Narrative(parts) => {
                    let text: String = parts.iter().map(|p| p.text.as_str()).collect();
                    let _ = writeln!(out, "  {}", text);
                }
            }
        }

        out
    }
}
