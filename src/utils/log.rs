use actix_web::HttpRequest;
use chrono::Local;

// Combined-format line for access and error logs. Relay failures keep a 200
// status on the wire, so the error message is appended to make them visible
// here.
pub fn log_request(req: &HttpRequest, status_code: u16, error_message: Option<&str>) -> String {
    let referer = req.headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    let user_agent = req.headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let client_ip = req.peer_addr().map(|addr| addr.ip().to_string()).unwrap_or_else(|| "unknown".to_string());
    let request_method = req.method().as_str();
    let request_uri = req.uri().to_string();
    let http_version = format!("{:?}", req.version());
    let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");

    match error_message {
        Some(msg) => format!(
            "{client_ip} - - [{time}] \"{request_method} {request_uri} {http_version}\" {status_code} \"{referer}\" \"{user_agent}\" \"{msg}\"",
        ),
        None => format!(
            "{client_ip} - - [{time}] \"{request_method} {request_uri} {http_version}\" {status_code} \"{referer}\" \"{user_agent}\"",
        ),
    }
}
