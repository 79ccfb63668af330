//! Weight-service request and response bodies. Records themselves are
//! [`store::WeightRecord`].

use serde::{Deserialize, Serialize};

/// Body of `POST /weights`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightInput {
    pub weight: f64,
    pub user_id: i64,
}

/// Body of `PUT /weights?userId=&weightId=`.
#[derive(Debug, Clone, Serialize)]
pub struct WeightUpdate {
    pub weight: f64,
}

/// Answer of `DELETE /weights?userId=&weightId=`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub user_id: i64,
    pub weight_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_input_shape() {
        let body = serde_json::to_string(&WeightInput {
            weight: 181.5,
            user_id: 3,
        })
        .unwrap();
        assert_eq!(body, r#"{"weight":181.5,"userId":3}"#);
    }

    #[test]
    fn test_delete_response() {
        let response: DeleteResponse = serde_json::from_str(
            r#"{"message":"Weight record deleted successfully","userId":3,"weightId":8}"#,
        )
        .unwrap();
        assert_eq!(response.weight_id, 8);
    }
}
