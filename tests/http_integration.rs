// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a mock bridge using wiremock.

use std::time::Duration;

use hue_sdk::command::{Command, Listing, SceneDraft, SceneTarget};
use hue_sdk::error::{Error, ProtocolError, ValueError};
use hue_sdk::protocol::{Pairing, RetryPolicy};
use hue_sdk::types::{Brightness, DeviceId, RgbColor, SceneId, TransitionTime};
use hue_sdk::{Bridge, BridgeSession};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER: &str = "testuser";

fn fast_retry(attempts: u32) -> RetryPolicy {
    RetryPolicy::new(attempts, Duration::from_millis(1))
}

fn bridge_for(server: &MockServer, attempts: u32) -> Bridge {
    Bridge::builder(BridgeSession::new(server.address().to_string(), USER))
        .with_retry(fast_retry(attempts))
        .build()
        .unwrap()
}

fn bridge_error(kind: u16, description: &str) -> Value {
    json!([{"error": {"type": kind, "address": "", "description": description}}])
}

fn success(key: &str, value: Value) -> Value {
    json!([{"success": {key: value}}])
}

// ============================================================================
// Pairing
// ============================================================================

mod pairing {
    use super::*;

    async fn mount_button_not_pressed(server: &MockServer, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(bridge_error(101, "link button not pressed")),
            )
            .up_to_n_times(times)
            .mount(server)
            .await;
    }

    async fn mount_username(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"success": {"username": "newuser"}}])),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn succeeds_after_button_press() {
        let server = MockServer::start().await;
        mount_button_not_pressed(&server, 2).await;
        mount_username(&server).await;

        let session = Pairing::new(server.address().to_string())
            .unwrap()
            .with_retry(fast_retry(3))
            .pair()
            .await
            .unwrap();

        assert_eq!(session.username(), "newuser");
        assert_eq!(session.address(), server.address().to_string());
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn sends_device_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .and(body_json(json!({"devicetype": "kitchen#tablet"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"success": {"username": "abc"}}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = Pairing::new(server.address().to_string())
            .unwrap()
            .with_device_type("kitchen#tablet")
            .with_retry(fast_retry(1))
            .pair()
            .await
            .unwrap();
        assert_eq!(session.username(), "abc");
    }

    #[tokio::test]
    async fn untyped_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"error": {"description": "link button not pressed"}}])),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_username(&server).await;

        let session = Pairing::new(server.address().to_string())
            .unwrap()
            .with_retry(fast_retry(2))
            .pair()
            .await
            .unwrap();

        assert_eq!(session.username(), "newuser");
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gives_up_when_button_never_pressed() {
        let server = MockServer::start().await;
        mount_button_not_pressed(&server, 10).await;
        mount_username(&server).await;

        let result = Pairing::new(server.address().to_string())
            .unwrap()
            .with_retry(fast_retry(3))
            .pair()
            .await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::ButtonNotPressed))
        ));
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn rejected_device_type_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(bridge_error(1, "invalid value for parameter devicetype")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = Pairing::new(server.address().to_string())
            .unwrap()
            .with_retry(fast_retry(5))
            .pair()
            .await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::DeviceTypeRejected(_)))
        ));
    }
}

// ============================================================================
// Lights
// ============================================================================

mod lights {
    use super::*;

    #[tokio::test]
    async fn on_sends_power_and_transition() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/lights/1/state")))
            .and(body_json(json!({"on": true, "transitiontime": 5})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(success("/lights/1/state/on", json!(true))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let bridge = bridge_for(&server, 1);
        let response = bridge
            .lights()
            .on(&DeviceId::from(1), TransitionTime::default())
            .await
            .unwrap();
        assert_eq!(response, success("/lights/1/state/on", json!(true)));
    }

    #[tokio::test]
    async fn set_brightness() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/lights/3/state")))
            .and(body_json(json!({"bri": 200})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(success("/lights/3/state/bri", json!(200))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let bridge = bridge_for(&server, 1);
        bridge
            .lights()
            .set_brightness(&DeviceId::new("3").unwrap(), Brightness::new(200).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_rgb_sends_chromaticity() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/lights/2/state")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let bridge = bridge_for(&server, 1);
        bridge
            .lights()
            .set_rgb(&DeviceId::from(2), RgbColor::new(255, 0, 0), TransitionTime::new(10))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = requests[0].body_json().unwrap();
        assert_eq!(body["transitiontime"], json!(10));

        let xy = body["xy"].as_array().unwrap();
        let x = xy[0].as_f64().unwrap();
        let y = xy[1].as_f64().unwrap();
        assert!((x - 0.6484).abs() < 1e-3, "x = {x}");
        assert!((y - 0.3309).abs() < 1e-3, "y = {y}");
    }

    #[tokio::test]
    async fn black_is_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let bridge = bridge_for(&server, 1);
        let result = bridge
            .lights()
            .set_hex(&DeviceId::from(1), "#000000", TransitionTime::default())
            .await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NoLuminance))
        ));

        let result = bridge
            .lights()
            .set_hex(&DeviceId::from(1), "#GG0000", TransitionTime::default())
            .await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::InvalidHexColor(_)))
        ));
    }

    async fn toggle_with(state: Value) -> (MockServer, hue_sdk::Result<Value>) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/lights/1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(state))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/lights/1/state")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let result = bridge_for(&server, 1)
            .lights()
            .toggle(&DeviceId::from(1), TransitionTime::INSTANT)
            .await;
        (server, result)
    }

    async fn sent_state(server: &MockServer) -> Option<Value> {
        server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .find(|request| request.method.as_str() == "PUT")
            .map(|request| request.body_json().unwrap())
    }

    #[tokio::test]
    async fn toggle_turns_lit_light_off() {
        let (server, result) = toggle_with(json!({"name": "Hall", "state": {"on": true}})).await;
        result.unwrap();
        assert_eq!(
            sent_state(&server).await,
            Some(json!({"on": false, "transitiontime": 0}))
        );
    }

    #[tokio::test]
    async fn toggle_turns_dark_light_on() {
        let (server, result) = toggle_with(json!({"state": {"on": false, "bri": 1}})).await;
        result.unwrap();
        assert_eq!(
            sent_state(&server).await,
            Some(json!({"on": true, "transitiontime": 0}))
        );
    }

    #[tokio::test]
    async fn toggle_without_state_fails() {
        let (server, result) = toggle_with(json!({"name": "Hall"})).await;
        assert!(matches!(
            result,
            Err(Error::AttributeFetch { path }) if path == "lights/1"
        ));
        assert_eq!(sent_state(&server).await, None);
    }
}

// ============================================================================
// Groups and scenes
// ============================================================================

mod groups {
    use super::*;

    #[tokio::test]
    async fn off_uses_group_action() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/groups/0/action")))
            .and(body_json(json!({"on": false, "transitiontime": 5})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(success("/groups/0/action/on", json!(false))),
            )
            .expect(1)
            .mount(&server)
            .await;

        bridge_for(&server, 1)
            .groups()
            .off(&DeviceId::from(0), TransitionTime::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn apply_scene() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/groups/1/action")))
            .and(body_json(json!({"scene": "AB34EF-on-0"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        bridge_for(&server, 1)
            .groups()
            .apply_scene(&DeviceId::from(1), SceneId::new("AB34EF-on-0").unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_group_scene() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/{USER}/scenes")))
            .and(body_json(json!({
                "name": "Evening",
                "recycle": false,
                "type": "GroupScene",
                "group": "2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success("id", json!("Abc123"))))
            .expect(1)
            .mount(&server)
            .await;

        let draft = SceneDraft::new("Evening", SceneTarget::Group(DeviceId::from(2)));
        let response = bridge_for(&server, 1).scenes().create(draft).await.unwrap();
        assert_eq!(response, success("id", json!("Abc123")));
    }
}

// ============================================================================
// Authenticated request loop
// ============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn bridge_error_is_retried_then_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/lights")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(bridge_error(1, "unauthorized user")),
            )
            .expect(3)
            .mount(&server)
            .await;

        let result = bridge_for(&server, 3).lights().list().await;
        match result {
            Err(Error::Protocol(ProtocolError::CouldNotAuthenticate(description))) => {
                assert_eq!(description, "unauthorized user");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn untyped_error_is_retried_then_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/lights")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"error": {"address": "/", "description": "unauthorized user"}}
            ])))
            .expect(3)
            .mount(&server)
            .await;

        let result = bridge_for(&server, 3).lights().list().await;
        match result {
            Err(Error::Protocol(ProtocolError::CouldNotAuthenticate(description))) => {
                assert_eq!(description, "unauthorized user");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn string_error_is_not_returned_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/groups")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "unauthorized"})))
            .expect(2)
            .mount(&server)
            .await;

        let result = bridge_for(&server, 2).groups().list().await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::CouldNotAuthenticate(description)))
                if description == "unauthorized"
        ));
    }

    #[tokio::test]
    async fn partial_success_is_returned_once() {
        let partial = json!([
            {"success": {"/lights/1/state/on": true}},
            {"error": {"type": 201, "address": "/lights/1/state/bri",
                       "description": "parameter, bri, is not modifiable"}}
        ]);

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/{USER}/lights/1/state")))
            .respond_with(ResponseTemplate::new(200).set_body_json(partial.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = bridge_for(&server, 6)
            .lights()
            .on(&DeviceId::from(1), TransitionTime::default())
            .await
            .unwrap();
        assert_eq!(response, partial);
    }

    #[tokio::test]
    async fn recovers_after_transient_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/groups")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "error": {"type": 1, "address": "/", "description": "unauthorized user"}
                })),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/groups")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"1": {"name": "Living room"}})),
            )
            .mount(&server)
            .await;

        let groups = bridge_for(&server, 2).groups().list().await.unwrap();
        assert_eq!(groups["1"]["name"], "Living room");
    }

    #[tokio::test]
    async fn http_failure_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = bridge_for(&server, 4).all().sensors().await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::ConnectionFailed(_)))
        ));
    }

    #[tokio::test]
    async fn listings_use_collection_paths() {
        let server = MockServer::start().await;
        for listing in Listing::ALL {
            Mock::given(method("GET"))
                .and(path(format!("/api/{USER}/{}", listing.path())))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"listing": listing.path()})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let bridge = bridge_for(&server, 1);
        for listing in Listing::ALL {
            let response = bridge.all().get(listing).await.unwrap();
            assert_eq!(response["listing"], listing.path());
        }
    }

    #[tokio::test]
    async fn timezones_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/{USER}/info/timezones")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Europe/Paris"])))
            .expect(1)
            .mount(&server)
            .await;

        let zones = bridge_for(&server, 1).all().timezones().await.unwrap();
        assert_eq!(zones, json!(["Europe/Paris"]));
    }
}
