// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use feast::types::{Field, GetOnlineFeaturesResponse, Record, int64_val};
    use feast::{Error, OnlineFeaturesResponse};
    use pretty_assertions::assert_eq;

    type TestResult = anyhow::Result<()>;

    fn two_rows() -> GetOnlineFeaturesResponse {
        GetOnlineFeaturesResponse {
            records: vec![
                Record::new()
                    .set_field("f1", Field::present(1_i64))
                    .set_field("f2", Field::null()),
                Record::new()
                    .set_field("f1", Field::present(2_i64))
                    .set_field("f2", Field::present(2_i64)),
            ],
        }
    }

    fn project_rows() -> GetOnlineFeaturesResponse {
        GetOnlineFeaturesResponse {
            records: vec![
                Record::new()
                    .set_field("project1/feature1", Field::present(1_i64))
                    .set_field("project1/feature2", Field::present(2_i64)),
                Record::new()
                    .set_field("project1/feature1", Field::present(3_i64))
                    .set_field("project1/feature2", Field::not_found()),
            ],
        }
    }

    #[test]
    fn int64_arrays_follow_order_and_fill() -> TestResult {
        let response = OnlineFeaturesResponse::new(two_rows());
        let got = response.int64_arrays(&["f2", "f1"], &[-1, -1])?;
        assert_eq!(got, vec![vec![-1, 1], vec![2, 2]]);
        Ok(())
    }

    #[test]
    fn int64_arrays_length_mismatch() {
        let response = OnlineFeaturesResponse::new(project_rows());
        let err = response
            .int64_arrays(&["project1/feature1", "project1/feature2"], &[0])
            .unwrap_err();
        assert!(
            matches!(err, Error::LengthMismatch { got: 1, want: 2 }),
            "{err:?}"
        );
        assert_eq!(
            err.to_string(),
            "length mismatch; number of na values (1) not equal to number of features requested (2)"
        );
    }

    #[test]
    fn int64_arrays_feature_not_found() {
        let response = OnlineFeaturesResponse::new(project_rows());
        let err = response
            .int64_arrays(&["project1/feature1", "project1/feature3"], &[0, 0])
            .unwrap_err();
        assert!(
            matches!(&err, Error::FeatureNotFound(f) if f == "project1/feature3"),
            "{err:?}"
        );
        assert_eq!(
            err.to_string(),
            "feature project1/feature3 not found in response"
        );
    }

    #[test]
    fn rows_preserve_order_and_fields() {
        let raw = project_rows();
        let response = OnlineFeaturesResponse::from(raw.clone());
        let rows = response.rows();
        assert_eq!(rows.len(), 2);
        for (row, record) in rows.iter().zip(&raw.records) {
            assert_eq!(row, &record.fields);
        }
        assert_eq!(rows[0]["project1/feature1"].value, int64_val(1));
        assert_eq!(rows[1]["project1/feature1"].value, int64_val(3));
        assert!(!rows[1]["project1/feature2"].is_present());
    }

    #[test]
    fn accessors_are_idempotent() -> TestResult {
        let response = OnlineFeaturesResponse::new(project_rows());
        let order = ["project1/feature2", "project1/feature1"];
        let a1 = response.int64_arrays(&order, &[0, 0])?;
        let r1 = response.rows();
        let a2 = response.int64_arrays(&order, &[0, 0])?;
        let r2 = response.rows();
        assert_eq!(a1, a2);
        assert_eq!(r1, r2);
        assert_eq!(a1, vec![vec![2, 1], vec![0, 3]]);
        assert_eq!(response.raw(), &project_rows());
        Ok(())
    }
}
