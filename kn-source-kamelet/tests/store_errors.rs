use async_trait::async_trait;
use camel_k::{Kamelet, Pipe};
use kn_source_kamelet::{
    create_binding, BindingStore, CreateBindingOptions, Error, SourceOverrides, SourceSelector,
};
use kube::error::ErrorResponse;
use serde::de::DeserializeOwned;
use std::fs;

fn mock_path() -> String {
    format!("{}/{}/", env!("CARGO_MANIFEST_DIR"), "../test/mock")
}

fn read_mock<T: DeserializeOwned>(filename: &str) -> T {
    let path = mock_path() + filename;
    let yaml = fs::read_to_string(path).expect("path to mock");
    serde_yaml::from_str(&yaml).unwrap()
}

fn api_error(code: u16, reason: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{reason} from api server"),
        reason: reason.to_string(),
        code,
    })
}

/// Serves the log-sink Kamelet and answers every Pipe call with a fixed error.
struct RejectingStore {
    create: (u16, &'static str),
    get: Option<(u16, &'static str)>,
    replace: (u16, &'static str),
}

#[async_trait]
impl BindingStore for RejectingStore {
    async fn get_kamelet(&self, _namespace: &str, _name: &str) -> Result<Kamelet, kube::Error> {
        Ok(read_mock("log_sink_kamelet.yaml"))
    }

    async fn get_pipe(&self, _namespace: &str, _name: &str) -> Result<Pipe, kube::Error> {
        match self.get {
            Some((code, reason)) => Err(api_error(code, reason)),
            None => Ok(read_mock("broker_pipe.yaml")),
        }
    }

    async fn create_pipe(&self, _namespace: &str, _pipe: &Pipe) -> Result<Pipe, kube::Error> {
        Err(api_error(self.create.0, self.create.1))
    }

    async fn replace_pipe(&self, _namespace: &str, _pipe: &Pipe) -> Result<Pipe, kube::Error> {
        Err(api_error(self.replace.0, self.replace.1))
    }
}

fn options(force: bool) -> CreateBindingOptions {
    CreateBindingOptions {
        name: "audit".to_string(),
        kamelet: "log-sink".to_string(),
        sink_properties: vec!["loggerName=audit".to_string()],
        source: SourceSelector::Broker("default".into()),
        overrides: SourceOverrides::default(),
        force,
    }
}

fn api_code(err: &Error) -> Option<u16> {
    match err {
        Error::Kube(kube::Error::Api(response)) => Some(response.code),
        _ => None,
    }
}

#[async_std::test]
async fn create_failure_is_returned_as_is() {
    let store = RejectingStore {
        create: (403, "Forbidden"),
        get: None,
        replace: (500, "InternalError"),
    };
    for force in [false, true] {
        let err = create_binding(&store, "default", options(force)).await.unwrap_err();
        assert_eq!(api_code(&err), Some(403), "got {err:?}");
    }
}

#[async_std::test]
async fn forced_update_surfaces_fetch_failure() {
    let store = RejectingStore {
        create: (409, "AlreadyExists"),
        get: Some((404, "NotFound")),
        replace: (500, "InternalError"),
    };
    let err = create_binding(&store, "default", options(true)).await.unwrap_err();
    assert_eq!(api_code(&err), Some(404), "got {err:?}");
}

#[async_std::test]
async fn forced_update_surfaces_replace_conflict() {
    let store = RejectingStore {
        create: (409, "AlreadyExists"),
        get: None,
        replace: (409, "Conflict"),
    };
    let err = create_binding(&store, "default", options(true)).await.unwrap_err();
    assert!(
        matches!(err, Error::Kube(kube::Error::Api(ref response)) if response.reason == "Conflict"),
        "got {err:?}"
    );
}

#[async_std::test]
async fn already_exists_without_force_is_not_an_api_error() {
    let store = RejectingStore {
        create: (409, "AlreadyExists"),
        get: None,
        replace: (500, "InternalError"),
    };
    let err = create_binding(&store, "default", options(false)).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(ref name) if name == "audit"), "got {err:?}");
}
