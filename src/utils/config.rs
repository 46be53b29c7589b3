//! Configuration and constants for the CLI.

/// Thread name prefix used by Reactor Netty event-loop threads
pub const REACTOR_THREAD_PREFIX: &str = "reactor-http";

/// Thread name prefix used by Reactor's boundedElastic scheduler
pub const BOUNDED_ELASTIC_THREAD_PREFIX: &str = "boundedElastic";

/// Frames that show a thread waiting on a socket read or an HTTP response head
pub const SOCKET_READ_MARKERS: &[&str] = &[
    "SocketInputStream.socketRead0",
    "receiveResponseHeader",
    "DefaultHttpResponseParser.parseHead",
];

/// Frames that show a thread inside a synchronous RestTemplate call
pub const REST_TEMPLATE_MARKERS: &[&str] = &["org.springframework.web.client.RestTemplate.exchange"];

/// Suffix of dump files picked up from directory arguments (`*.txt`)
pub const DUMP_FILE_SUFFIX: &str = ".txt";

/// Exit code when no path arguments are given
pub const EXIT_USAGE: i32 = 1;

/// Exit code when the arguments resolve to zero files
pub const EXIT_NO_FILES: i32 = 2;

/// Exit code when the report cannot be written to stdout
pub const EXIT_OUTPUT_FAILED: i32 = 3;

/// Heading printed before the interpretation hints
pub const INTERPRETATION_HEADING: &str = "Interpretation:";

/// Interpretation hints, printed verbatim after the table
pub const INTERPRETATION_LINES: [&str; 3] = [
    "- reactor_restTemplate_threads > 0  => event-loop 正在被阻塞(坏)",
    "- offload模式应当: reactor_restTemplate_threads ~= 0 且 boundedElastic_restTemplate_threads > 0",
    "- reactor_socketRead_threads 高 => 常见是下游慢导致等待响应头/读阻塞",
];
