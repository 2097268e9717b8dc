use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Request, Url};

use super::auth::AuthProvider;
use crate::constants::{
    ASYNC_FUNCTION_ROUTE, DEFAULT_CONTENT_TYPE, DEFAULT_METHOD, FUNCTION_ROUTE,
    SYSTEM_FUNCTIONS_ROUTE,
};
use crate::utils::{FaasError, FaasResult};

// Verbs a function may be invoked with
const HTTP_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

/// Everything needed to invoke one function once
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub namespace: Option<String>,
    pub function_name: String,
    pub content_type: String,
    /// `key=value` entries, in order
    pub query: Vec<String>,
    /// `key: value` or `key=value` entries, in order
    pub headers: Vec<String>,
    pub async_invoke: bool,
    pub method: String,
    pub body: Vec<u8>,
    pub tls_insecure: bool,
}

impl Default for InvocationRequest {
    fn default() -> Self {
        Self {
            namespace: None,
            function_name: String::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            async_invoke: false,
            method: DEFAULT_METHOD.to_string(),
            body: Vec::new(),
            tls_insecure: false,
        }
    }
}

/// Build the request for invoking a function. Performs no I/O.
pub fn build_invoke_request(
    gateway: &str,
    invocation: InvocationRequest,
    auth: &dyn AuthProvider,
) -> FaasResult<Request> {
    let function_name = invocation.function_name.trim();
    if function_name.is_empty() {
        return Err(FaasError::Usage(
            "please provide a name for the function".to_string(),
        ));
    }

    let route = if invocation.async_invoke {
        ASYNC_FUNCTION_ROUTE
    } else {
        FUNCTION_ROUTE
    };
    let mut url = route_url(gateway, route, Some(function_name))?;

    let mut pairs = namespace_pair(invocation.namespace.as_deref());
    for entry in &invocation.query {
        pairs.push(split_query(entry)?);
    }
    append_query(&mut url, &pairs);

    let mut request = Request::new(parse_method(&invocation.method)?, url);
    if !invocation.body.is_empty() {
        *request.body_mut() = Some(Body::from(invocation.body));
    }

    let content_type = HeaderValue::from_str(&invocation.content_type).map_err(|_| {
        FaasError::MalformedRequest(format!("invalid content type '{}'", invocation.content_type))
    })?;
    request.headers_mut().insert(CONTENT_TYPE, content_type);

    for entry in &invocation.headers {
        let (name, value) = parse_header(entry)?;
        // insert replaces, so the last occurrence of a name wins
        request.headers_mut().insert(name, value);
    }

    auth.apply(gateway, &mut request)?;
    Ok(request)
}

/// Build the `GET /system/functions` request. Performs no I/O.
pub fn build_list_request(
    gateway: &str,
    namespace: Option<&str>,
    auth: &dyn AuthProvider,
) -> FaasResult<Request> {
    let mut url = route_url(gateway, SYSTEM_FUNCTIONS_ROUTE, None)?;
    append_query(&mut url, &namespace_pair(namespace));

    let mut request = Request::new(Method::GET, url);
    auth.apply(gateway, &mut request)?;
    Ok(request)
}

fn route_url(gateway: &str, route: &[&str], function_name: Option<&str>) -> FaasResult<Url> {
    let mut url = Url::parse(gateway).map_err(|e| {
        FaasError::MalformedRequest(format!("invalid gateway URL '{}': {}", gateway, e))
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            FaasError::MalformedRequest(format!("gateway URL '{}' cannot be a base", gateway))
        })?;
        segments.pop_if_empty().extend(route);
        if let Some(name) = function_name {
            segments.push(name);
        }
    }

    Ok(url)
}

fn namespace_pair(namespace: Option<&str>) -> Vec<(&str, &str)> {
    match namespace {
        Some(ns) if !ns.is_empty() => vec![("namespace", ns)],
        _ => Vec::new(),
    }
}

fn append_query(url: &mut Url, pairs: &[(&str, &str)]) {
    // query_pairs_mut would leave a dangling '?' with nothing to add
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
}

fn split_query(entry: &str) -> FaasResult<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(FaasError::MalformedRequest(format!(
            "query '{}' must be of the form key=value",
            entry
        ))),
    }
}

fn parse_method(method: &str) -> FaasResult<Method> {
    let upper = method.trim().to_uppercase();
    if !HTTP_METHODS.contains(&upper.as_str()) {
        return Err(FaasError::MalformedRequest(format!(
            "'{}' is not a valid HTTP method",
            method
        )));
    }
    Method::from_bytes(upper.as_bytes())
        .map_err(|_| FaasError::MalformedRequest(format!("'{}' is not a valid HTTP method", method)))
}

fn parse_header(entry: &str) -> FaasResult<(HeaderName, HeaderValue)> {
    let malformed = || {
        FaasError::MalformedRequest(format!(
            "header '{}' must be of the form key=value or key:value",
            entry
        ))
    };

    // Split on whichever separator comes first, so values may contain the other
    let index = entry.find([':', '=']).ok_or_else(malformed)?;
    let (key, value) = (entry[..index].trim(), entry[index + 1..].trim());
    if key.is_empty() {
        return Err(malformed());
    }

    let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| malformed())?;
    let value = HeaderValue::from_str(value).map_err(|_| malformed())?;
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::auth::{MockAuthProvider, NoAuth};
    use pretty_assertions::assert_eq;
    use reqwest::header::AUTHORIZATION;

    fn invocation(name: &str) -> InvocationRequest {
        InvocationRequest {
            function_name: name.to_string(),
            ..Default::default()
        }
    }

    fn body_of(request: &Request) -> Option<&[u8]> {
        request.body().and_then(|b| b.as_bytes())
    }

    #[test]
    fn test_json_echo_request() {
        let mut inv = invocation("echo");
        inv.content_type = "application/json".to_string();
        inv.body = b"\"hi\"".to_vec();

        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://x/function/echo");
        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(body_of(&request), Some(&b"\"hi\""[..]));
    }

    #[test]
    fn test_defaults() {
        let request = build_invoke_request("http://x", invocation("env"), &NoAuth).unwrap();
        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_async_route_and_namespace() {
        let mut inv = invocation("resize-img");
        inv.async_invoke = true;
        inv.namespace = Some("staging".to_string());

        let request = build_invoke_request("http://x:8080", inv, &NoAuth).unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://x:8080/async-function/resize-img?namespace=staging"
        );
    }

    #[test]
    fn test_empty_namespace_is_ignored() {
        let mut inv = invocation("echo");
        inv.namespace = Some(String::new());
        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_gateway_with_base_path() {
        let request = build_invoke_request("http://x/openfaas", invocation("echo"), &NoAuth).unwrap();
        assert_eq!(request.url().as_str(), "http://x/openfaas/function/echo");
    }

    #[test]
    fn test_query_params_in_order() {
        let mut inv = invocation("env");
        inv.namespace = Some("fn".to_string());
        inv.query = vec!["repo=faas-cli".to_string(), "org=open=faas".to_string()];

        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();
        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("namespace".to_string(), "fn".to_string()),
                ("repo".to_string(), "faas-cli".to_string()),
                ("org".to_string(), "open=faas".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_without_equals_is_malformed() {
        let mut inv = invocation("env");
        inv.query = vec!["repo".to_string()];
        let err = build_invoke_request("http://x", inv, &NoAuth).unwrap_err();
        assert!(matches!(err, FaasError::MalformedRequest(_)));
    }

    #[test]
    fn test_both_header_separators() {
        let mut inv = invocation("env");
        inv.headers = vec![
            "X-Ping-Url=http://request.bin/etc".to_string(),
            "X-Callback-Url: http://gateway:8080/function/send2slack".to_string(),
        ];

        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();
        assert_eq!(
            request.headers().get("x-ping-url").unwrap(),
            "http://request.bin/etc"
        );
        assert_eq!(
            request.headers().get("x-callback-url").unwrap(),
            "http://gateway:8080/function/send2slack"
        );
    }

    #[test]
    fn test_last_header_wins() {
        let mut inv = invocation("env");
        inv.headers = vec![
            "X-Trace=first".to_string(),
            "x-trace: second".to_string(),
            "Content-Type=application/xml".to_string(),
        ];

        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();
        let traces: Vec<_> = request.headers().get_all("x-trace").iter().collect();
        assert_eq!(traces, vec!["second"]);
        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/xml");
    }

    #[test]
    fn test_malformed_headers() {
        for bad in ["no-separator", "=value", "bad header=1"] {
            let mut inv = invocation("env");
            inv.headers = vec![bad.to_string()];
            let err = build_invoke_request("http://x", inv, &NoAuth).unwrap_err();
            assert!(matches!(err, FaasError::MalformedRequest(_)), "{}", bad);
        }
    }

    #[test]
    fn test_method_parsing() {
        let mut inv = invocation("flask");
        inv.method = "get".to_string();
        let request = build_invoke_request("http://x", inv, &NoAuth).unwrap();
        assert_eq!(*request.method(), Method::GET);

        let mut inv = invocation("flask");
        inv.method = "FETCH".to_string();
        let err = build_invoke_request("http://x", inv, &NoAuth).unwrap_err();
        assert!(matches!(err, FaasError::MalformedRequest(_)));
    }

    #[test]
    fn test_empty_function_name_is_usage_error() {
        let err = build_invoke_request("http://x", invocation("  "), &NoAuth).unwrap_err();
        assert!(matches!(err, FaasError::Usage(_)));
    }

    #[test]
    fn test_auth_applied_with_gateway() {
        let mut auth = MockAuthProvider::new();
        auth.expect_apply().times(1).returning(|gateway, request| {
            assert_eq!(gateway, "http://x");
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::from_static("Bearer t"));
            Ok(())
        });

        let request = build_invoke_request("http://x", invocation("echo"), &auth).unwrap();
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer t");
    }

    #[test]
    fn test_list_request() {
        let request = build_list_request("http://x", Some("foo"), &NoAuth).unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "http://x/system/functions?namespace=foo");

        let request = build_list_request("http://x", None, &NoAuth).unwrap();
        assert_eq!(request.url().as_str(), "http://x/system/functions");
    }
}
