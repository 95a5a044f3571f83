#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        let error = $error;
        assert_eq!($res.status(), error.status());

        let res_json: serde_json::Value = $res.json().await;
        ::assert_json_diff::assert_json_eq!(
            res_json,
            ::serde_json::json!({
                "success": false,
                "error": error.status().as_u16(),
                "message": error.message(),
            })
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

#[allow(unused_macros)]
macro_rules! assert_question_ids {
    ($body:expr, $ids:expr) => {{
        let ids: Vec<i64> = $body["questions"]
            .as_array()
            .expect("questions is not an array")
            .iter()
            .map(|question| question["id"].as_i64().expect("id is not a number"))
            .collect();
        let expected: Vec<i64> = $ids.into_iter().map(i64::from).collect();
        assert_eq!(ids, expected);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_question_ids;
