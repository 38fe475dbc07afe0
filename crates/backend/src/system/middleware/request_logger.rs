use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог: время, длительность, размер ответа, статус, метод и путь
/// вместе с query string (is_demo matters for listings).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} | {:>5}ms | {:>8} | {} {:>6} {} ({})",
                Local::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{} | {:>5}ms | {:>8} | {} {:>6} {}",
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_size(bytes.len()),
        parts.status.as_u16(),
        method,
        uri
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Размер ответа: байты до 1 KiB, дальше KiB с одним знаком
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
    }
}
