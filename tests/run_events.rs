//! End-to-end tests for the run event pipeline: raw Debezium records in,
//! serialized run events out.

use anyhow::Result;
use dispatcher_event_streams::{
    ChangeRecord, Outcome, RunEvent, RunEventTransform, TransformConfig,
};
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn transform() -> RunEventTransform {
    RunEventTransform::new(
        TransformConfig::new("platform.playbook-dispatcher.runs", "runs").unwrap(),
    )
}

fn run_row() -> Value {
    json!({
        "id": "b5c85ef4-1c75-41b4-a7f5-dec63a2dfa94",
        "account": "0000001",
        "recipient": "276c4c48-bc6b-4c69-a21c-95e9886314b5",
        "correlation_id": "2046f10c-f9c1-4fbd-8498-12929c8d2428",
        "service": "remediations",
        "url": "https://console.example.com/api/v1/remediations",
        "labels": "{\"remediation_id\": \"1234\"}",
        "playbook_name": null,
        "playbook_run_url": null,
        "sat_id": null,
        "sat_org_id": null,
        "status": "success",
        "timeout": 3600,
        "created_at": "2021-01-12T14:30:36.331904+00:00",
        "updated_at": "2021-01-12T14:35:12.406868+00:00",
    })
}

/// A full Debezium record as the connector renders it; the transform only
/// reads `op`, `source.table` and the row images.
fn debezium_record(op: &str, before: Value, after: Value) -> ChangeRecord {
    ChangeRecord {
        topic: "pd.public.runs".to_string(),
        partition: Some(0),
        key: Some(json!({"id": "b5c85ef4-1c75-41b4-a7f5-dec63a2dfa94"})),
        value: Some(json!({
            "before": before,
            "after": after,
            "source": {
                "version": "1.9.7.Final",
                "connector": "postgresql",
                "name": "pd",
                "ts_ms": 1610461836331_i64,
                "snapshot": "false",
                "db": "dispatcher",
                "schema": "public",
                "table": "runs",
                "lsn": 24023128_i64,
                "txId": 555_i64,
            },
            "op": op,
            "ts_ms": 1610461836331_i64,
            "transaction": null,
        })),
        timestamp: Some(1610461836331),
    }
}

#[test]
fn test_create_produces_full_run_event() -> Result<()> {
    init_tracing();

    let record = debezium_record("c", Value::Null, run_row());
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    assert_eq!(sink.topic, "platform.playbook-dispatcher.runs");
    assert_eq!(sink.partition, Some(0));
    assert_eq!(sink.timestamp, Some(1610461836331));
    assert_eq!(sink.key, "b5c85ef4-1c75-41b4-a7f5-dec63a2dfa94");

    let body: Value = serde_json::from_str(&sink.value)?;
    assert_eq!(
        body,
        json!({
            "event_type": "create",
            "payload": {
                "id": "b5c85ef4-1c75-41b4-a7f5-dec63a2dfa94",
                "account": "0000001",
                "recipient": "276c4c48-bc6b-4c69-a21c-95e9886314b5",
                "correlation_id": "2046f10c-f9c1-4fbd-8498-12929c8d2428",
                "service": "remediations",
                "url": "https://console.example.com/api/v1/remediations",
                "labels": {"remediation_id": "1234"},
                "status": "success",
                "timeout": 3600,
                "created_at": "2021-01-12T14:30:36.331904+00:00",
                "updated_at": "2021-01-12T14:35:12.406868+00:00",
            }
        })
    );

    assert_eq!(
        sink.headers,
        vec![
            ("event_type".to_string(), "create".to_string()),
            ("service".to_string(), "remediations".to_string()),
            ("status".to_string(), "success".to_string()),
            ("account".to_string(), "0000001".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_url_is_emitted_exactly_as_stored() -> Result<()> {
    init_tracing();

    let mut row = run_row();
    row["url"] = json!("http://example.com");

    let record = debezium_record("c", Value::Null, row);
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    let body: Value = serde_json::from_str(&sink.value)?;
    assert_eq!(body["payload"]["url"], json!("http://example.com"));
    Ok(())
}

#[test]
fn test_delete_builds_from_before_image() -> Result<()> {
    init_tracing();

    let record = debezium_record("d", run_row(), Value::Null);
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    let body: Value = serde_json::from_str(&sink.value)?;
    assert_eq!(body["event_type"], json!("delete"));
    assert_eq!(body["payload"]["account"], json!("0000001"));
    Ok(())
}

#[test]
fn test_satellite_columns_are_carried_when_present() -> Result<()> {
    init_tracing();

    let mut row = run_row();
    row["playbook_name"] = json!("Apply security patches");
    row["playbook_run_url"] = json!("https://satellite.example.com/runs/77");
    row["sat_id"] = json!("aa3b1faa-56f3-4d14-8258-615d11e20060");
    row["sat_org_id"] = json!("5");

    let record = debezium_record("u", Value::Null, row);
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    let body: Value = serde_json::from_str(&sink.value)?;
    let payload = &body["payload"];
    assert_eq!(payload["playbook_name"], json!("Apply security patches"));
    assert_eq!(
        payload["playbook_run_url"],
        json!("https://satellite.example.com/runs/77")
    );
    assert_eq!(payload["sat_id"], json!("aa3b1faa-56f3-4d14-8258-615d11e20060"));
    assert_eq!(payload["sat_org_id"], json!("5"));
    Ok(())
}

#[test]
fn test_unknown_columns_survive_in_the_body() -> Result<()> {
    init_tracing();

    let mut row = run_row();
    row["org_id"] = json!("5318290");

    let record = debezium_record("c", Value::Null, row);
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    let body: Value = serde_json::from_str(&sink.value)?;
    assert_eq!(body["payload"]["org_id"], json!("5318290"));

    // Extension fields come after the fixed set on the wire.
    let updated_at = sink.value.find("\"updated_at\"").unwrap();
    let org_id = sink.value.find("\"org_id\"").unwrap();
    assert!(updated_at < org_id);
    Ok(())
}

#[test]
fn test_emitted_body_round_trips() -> Result<()> {
    init_tracing();

    let record = debezium_record("c", Value::Null, run_row());
    let Outcome::Emit(sink) = transform().apply(&record)? else {
        panic!("expected an emitted record");
    };

    let event: RunEvent = serde_json::from_str(&sink.value)?;
    assert_eq!(event.payload.id, sink.key);
    assert_eq!(serde_json::to_string(&event)?, sink.value);
    Ok(())
}

#[test]
fn test_irrelevant_records_pass_through() -> Result<()> {
    init_tracing();
    let t = transform();

    // Another table on the same change stream.
    let mut record = debezium_record("c", Value::Null, run_row());
    record.value.as_mut().unwrap()["source"]["table"] = json!("run_hosts");
    assert_eq!(t.apply(&record)?, Outcome::Unchanged);

    // Truncate has no event mapping.
    let record = debezium_record("t", Value::Null, Value::Null);
    assert_eq!(t.apply(&record)?, Outcome::Unchanged);

    // Schema-change style value without an op field.
    let mut record = debezium_record("c", Value::Null, run_row());
    record.value = Some(json!({"ddl": "ALTER TABLE runs ADD COLUMN org_id text"}));
    assert_eq!(t.apply(&record)?, Outcome::Unchanged);

    // Tombstone.
    let mut record = debezium_record("c", Value::Null, run_row());
    record.value = None;
    assert_eq!(t.apply(&record)?, Outcome::Unchanged);

    Ok(())
}

#[test]
fn test_heartbeat_topic_is_dropped() -> Result<()> {
    init_tracing();

    let mut record = debezium_record("c", Value::Null, run_row());
    record.topic = "__debezium-heartbeat-pd.dispatcher".to_string();
    assert_eq!(transform().apply(&record)?, Outcome::Drop);
    Ok(())
}
