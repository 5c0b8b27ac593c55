//! Decision-tree rule sets shown alongside the importance tables.
//!
//! Each set is an ordered IF / ELSE IF chain over clinical findings with a
//! fixed probability per branch, ending in an unconditional fallback.

use serde::Serialize;

/// Probability attached to the unconditional fallback branch.
pub const FALLBACK_PROBABILITY: f64 = 0.90;
/// Prediction of the unconditional fallback branch.
pub const FALLBACK_PREDICTION: &str = "正常";

/// One branch of a rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionRule {
    /// `None` for the final ELSE branch.
    pub condition: Option<&'static str>,
    pub prediction: &'static str,
    pub probability: f64,
}

impl DecisionRule {
    pub fn is_fallback(&self) -> bool {
        self.condition.is_none()
    }
}

const fn when(condition: &'static str, prediction: &'static str, probability: f64) -> DecisionRule {
    DecisionRule { condition: Some(condition), prediction, probability }
}

const OTHERWISE: DecisionRule = DecisionRule {
    condition: None,
    prediction: FALLBACK_PREDICTION,
    probability: FALLBACK_PROBABILITY,
};

pub(crate) static DIABETIC_RETINOPATHY: [DecisionRule; 4] = [
    when(r#"病人年龄 > 55 AND 诊断关键词 CONTAINS "糖尿病视网膜病变""#, "糖尿病视网膜病变", 0.95),
    when(r#"病人年龄 > 55 AND 诊断关键词 NOT CONTAINS "糖尿病视网膜病变" AND 诊断关键词 CONTAINS "糖尿病""#, "糖尿病视网膜病变", 0.80),
    when("病人年龄 <= 55 AND 家族病史存在糖尿病", "糖尿病视网膜病变", 0.65),
    OTHERWISE,
];

pub(crate) static GLAUCOMA: [DecisionRule; 4] = [
    when(r#"眼压值 > 22 AND 诊断关键词 CONTAINS "青光眼""#, "青光眼", 0.95),
    when(r#"眼压值 > 22 AND 诊断关键词 NOT CONTAINS "青光眼" AND 视野检查异常"#, "青光眼", 0.80),
    when("眼压值 <= 22 AND 家族病史存在青光眼", "青光眼", 0.65),
    OTHERWISE,
];

pub(crate) static CATARACT: [DecisionRule; 4] = [
    when(r#"病人年龄 > 60 AND 诊断关键词 CONTAINS "白内障""#, "白内障", 0.95),
    when(r#"病人年龄 > 60 AND 诊断关键词 NOT CONTAINS "白内障" AND 视力下降程度 > 2级"#, "白内障", 0.80),
    when(r#"病人年龄 <= 60 AND 诊断关键词 CONTAINS "白内障""#, "白内障", 0.65),
    OTHERWISE,
];

pub(crate) static MACULAR_DEGENERATION: [DecisionRule; 4] = [
    when(r#"病人年龄 > 65 AND 诊断关键词 CONTAINS "老年黄斑病变""#, "老年黄斑病变", 0.95),
    when(r#"病人年龄 > 65 AND 诊断关键词 NOT CONTAINS "老年黄斑病变" AND 黄斑区检查异常"#, "老年黄斑病变", 0.80),
    when("病人年龄 <= 65 AND 吸烟史 > 10年", "老年黄斑病变", 0.65),
    OTHERWISE,
];

pub(crate) static HYPERTENSIVE_RETINOPATHY: [DecisionRule; 4] = [
    when(r#"血压 > 140/90 AND 诊断关键词 CONTAINS "高血压视网膜病变""#, "高血压视网膜病变", 0.95),
    when(r#"血压 > 140/90 AND 诊断关键词 NOT CONTAINS "高血压视网膜病变" AND 病人年龄 > 60"#, "高血压视网膜病变", 0.80),
    when("血压 <= 140/90 AND 家族病史存在高血压", "高血压视网膜病变", 0.65),
    OTHERWISE,
];

pub(crate) static PATHOLOGICAL_MYOPIA: [DecisionRule; 4] = [
    when(r#"诊断关键词 CONTAINS "病理性近视" AND 屈光度 < -6.00D"#, "病理性近视", 0.95),
    when(r#"屈光度 < -6.00D AND 诊断关键词 NOT CONTAINS "病理性近视" AND 眼轴长度 > 26mm"#, "病理性近视", 0.80),
    when("屈光度 >= -6.00D AND 病人年龄 < 30 AND 眼轴长度 > 26mm", "病理性近视", 0.65),
    OTHERWISE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_probabilities_are_fixed() {
        let probs: Vec<_> = GLAUCOMA.iter().map(|r| r.probability).collect();
        assert_eq!(probs, vec![0.95, 0.80, 0.65, 0.90]);
    }

    #[test]
    fn test_only_last_branch_is_fallback() {
        assert!(!CATARACT[0].is_fallback());
        assert!(CATARACT[3].is_fallback());
        assert_eq!(CATARACT[3].prediction, "正常");
    }
}
