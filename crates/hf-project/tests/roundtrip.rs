use hf_core::{ParamValue, Params};
use hf_project::schema::*;
use hf_project::{load_json, load_yaml, save_json, save_yaml, validate_definition};

fn two_compliance_definition() -> ModelDefinition {
    let mut lv_params = Params::new();
    lv_params.insert("vol_l", ParamValue::Number(0.12));
    lv_params.insert("u_vol_l", ParamValue::Number(0.06));
    lv_params.insert("el_base_mmhg_per_l", ParamValue::Number(120.0));
    lv_params.insert("el_k_mmhg_per_l3", ParamValue::Number(2000.0));

    let mut ao_params = Params::new();
    ao_params.insert("vol_l", ParamValue::Number(0.08));
    ao_params.insert("u_vol_l", ParamValue::Number(0.05));
    ao_params.insert("el_base_mmhg_per_l", ParamValue::Number(800.0));
    ao_params.insert("content", ParamValue::Text("blood".to_string()));

    ModelDefinition {
        name: "normal neonate".to_string(),
        description: "two-compartment test circuit".to_string(),
        weight_kg: 3.3,
        stepsize_s: 0.0005,
        components: vec![
            ComponentSpec {
                kind: "Compliance".to_string(),
                name: "LV".to_string(),
                params: lv_params,
            },
            ComponentSpec {
                kind: "Compliance".to_string(),
                name: "AO".to_string(),
                params: ao_params,
            },
        ],
    }
}

#[test]
fn roundtrip_json() {
    let definition = two_compliance_definition();
    validate_definition(&definition).unwrap();

    let path = std::env::temp_dir().join("hf_definition_roundtrip.json");
    save_json(&path, &definition).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(definition, loaded);
}

#[test]
fn roundtrip_yaml() {
    let definition = two_compliance_definition();

    let path = std::env::temp_dir().join("hf_definition_roundtrip.yaml");
    save_yaml(&path, &definition).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(definition, loaded);
}

#[test]
fn declaration_order_survives_roundtrip() {
    let definition = two_compliance_definition();

    let path = std::env::temp_dir().join("hf_definition_order.json");
    save_json(&path, &definition).unwrap();
    let loaded = load_json(&path).unwrap();

    let names: Vec<&str> = loaded.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["LV", "AO"]);
}

#[test]
fn raw_json_with_flattened_params_loads() {
    let json = r#"{
        "name": "inline",
        "weight_kg": 3.3,
        "stepsize_s": 0.0005,
        "components": [
            {
                "kind": "Compliance",
                "name": "VEN",
                "vol_l": 0.3,
                "u_vol_l": 0.2,
                "el_base_mmhg_per_l": 50.0,
                "is_enabled": true
            }
        ]
    }"#;
    let path = std::env::temp_dir().join("hf_definition_raw.json");
    std::fs::write(&path, json).unwrap();

    let loaded = load_json(&path).unwrap();
    assert_eq!(loaded.components.len(), 1);
    assert_eq!(loaded.description, "");
    assert_eq!(
        loaded.components[0].params.get("is_enabled"),
        Some(&ParamValue::Bool(true))
    );
}

#[test]
fn save_refuses_invalid_definition() {
    let mut definition = two_compliance_definition();
    definition.stepsize_s = 0.0;

    let path = std::env::temp_dir().join("hf_definition_invalid.json");
    assert!(save_json(&path, &definition).is_err());
}
