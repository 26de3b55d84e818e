use crate::blockchain::spend_bundle_conditions::SpendBundleConditions;
use crate::validation::errors::ValidationError;
use dg_xch_macros::ChiaSerial;
use serde::{Deserialize, Serialize};

#[derive(ChiaSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct NPCResult {
    pub error: Option<u16>,
    pub conds: Option<SpendBundleConditions>,
    pub cost: u64,
}
impl From<Result<SpendBundleConditions, ValidationError>> for NPCResult {
    fn from(value: Result<SpendBundleConditions, ValidationError>) -> Self {
        match value {
            Ok(conds) => NPCResult {
                error: None,
                cost: conds.cost,
                conds: Some(conds),
            },
            Err(e) => NPCResult {
                error: Some(e.code()),
                conds: None,
                cost: 0,
            },
        }
    }
}
impl NPCResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
