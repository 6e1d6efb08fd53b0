use chrono::NaiveDate;
use serde_json::json;

use fitness_center::models::*;

fn sample_member() -> Member {
    Member {
        id: 7,
        name: "Jordan Lee".to_string(),
        email: "jordan@example.com".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        membership_type: "basic".to_string(),
        active: true,
    }
}

#[cfg(test)]
mod member_model_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut member = sample_member();
        let changes: UpdateMember = serde_json::from_value(json!({ "active": false })).unwrap();

        member.apply(changes);

        let expected = Member {
            active: false,
            ..sample_member()
        };
        assert_eq!(member, expected);
    }

    #[test]
    fn test_apply_overwrites_every_allowed_field() {
        let mut member = sample_member();
        let changes: UpdateMember = serde_json::from_value(json!({
            "name": "Jordan Smith",
            "email": "jsmith@example.com",
            "membership_type": "premium",
            "active": false
        }))
        .unwrap();

        member.apply(changes);

        assert_eq!(member.id, 7);
        assert_eq!(member.name, "Jordan Smith");
        assert_eq!(member.email, "jsmith@example.com");
        assert_eq!(member.membership_type, "premium");
        assert!(!member.active);
        assert_eq!(member.join_date, sample_member().join_date);
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let mut member = sample_member();
        let changes: UpdateMember = serde_json::from_value(json!({})).unwrap();

        member.apply(changes);

        assert_eq!(member, sample_member());
    }

    #[test]
    fn test_update_rejects_keys_outside_the_allow_list() {
        for body in [
            json!({ "id": 99 }),
            json!({ "join_date": "2024-01-01T00:00:00" }),
            json!({ "workout_sessions": [] }),
        ] {
            let result = serde_json::from_value::<UpdateMember>(body.clone());
            assert!(result.is_err(), "should reject {}", body);
        }
    }

    #[test]
    fn test_update_rejects_null_for_required_columns() {
        for field in ["name", "email", "membership_type", "active"] {
            let body = json!({ field: null });
            let result = serde_json::from_value::<UpdateMember>(body);
            assert!(result.is_err(), "null {} should be rejected", field);
        }
    }

    #[test]
    fn test_create_requires_every_field() {
        let complete = json!({
            "name": "Sam",
            "email": "sam@example.com",
            "membership_type": "student"
        });
        assert!(serde_json::from_value::<CreateMember>(complete.clone()).is_ok());

        for field in ["name", "email", "membership_type"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            let err = serde_json::from_value::<CreateMember>(body).unwrap_err();
            assert!(err.to_string().contains(field), "{}", err);
        }
    }

    #[test]
    fn test_create_ignores_extra_keys() {
        let body = json!({
            "name": "Sam",
            "email": "sam@example.com",
            "membership_type": "student",
            "active": false
        });

        assert!(serde_json::from_value::<CreateMember>(body).is_ok());
    }

    #[test]
    fn test_member_serializes_expected_shape() {
        let value = serde_json::to_value(sample_member()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Jordan Lee",
                "email": "jordan@example.com",
                "join_date": "2024-01-02T08:00:00",
                "membership_type": "basic",
                "active": true
            })
        );
    }
}
