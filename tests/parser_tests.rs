use jstack_analyzer::parser::{
    parse_dump_file, parse_thread_header, read_dump, segment_threads, split_lines,
};
use jstack_analyzer::utils::ParseError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_DUMP: &str = r#"2024-05-14 10:21:07
Full thread dump OpenJDK 64-Bit Server VM (17.0.9+9 mixed mode, sharing):

"main" #1 prio=5 os_prio=0 cpu=512.33ms elapsed=120.50s tid=0x00007f waiting on condition
   java.lang.Thread.State: WAITING (parking)
	at jdk.internal.misc.Unsafe.park(java.base@17.0.9/Native Method)

"reactor-http-nio-2" #31 daemon prio=5 os_prio=0 tid=0x00007e runnable
   java.lang.Thread.State: RUNNABLE
	at java.net.SocketInputStream.socketRead0(java.base@17.0.9/Native Method)
	at org.springframework.web.client.RestTemplate.exchange(RestTemplate.java:666)

"boundedElastic-4" #44 daemon prio=5 os_prio=0 tid=0x00007d waiting on condition
	at java.lang.Thread.run(java.base@17.0.9/Thread.java:833)
"#;

#[test]
fn test_segment_sample_dump() {
    let threads = segment_threads(SAMPLE_DUMP);
    let names: Vec<&str> = threads.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["main", "reactor-http-nio-2", "boundedElastic-4"]);
}

#[test]
fn test_no_line_lost_after_first_header() {
    let threads = segment_threads(SAMPLE_DUMP);
    let recorded: usize = threads.iter().map(|t| t.line_count()).sum();

    let all_lines = split_lines(SAMPLE_DUMP);
    let first_header = all_lines
        .iter()
        .position(|l| parse_thread_header(l).is_some())
        .unwrap();

    assert_eq!(recorded, all_lines.len() - first_header);
}

#[test]
fn test_records_start_with_their_header() {
    for thread in segment_threads(SAMPLE_DUMP) {
        assert_eq!(parse_thread_header(thread.header()), Some(thread.name.as_str()));
    }
}

#[test]
fn test_lines_before_first_header_are_excluded() {
    let text = "\tat org.springframework.web.client.RestTemplate.exchange(X.java:1)\n\"main\"\n";
    let threads = segment_threads(text);

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].lines, vec!["\"main\"".to_string()]);
}

#[test]
fn test_read_dump_drops_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"main\" \xff\xfe #1\n\tat foo\n").unwrap();

    let text = read_dump(file.path()).unwrap();
    assert_eq!(text, "\"main\"  #1\n\tat foo\n");

    let threads = parse_dump_file(file.path()).unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].name, "main");
    assert_eq!(threads[0].lines[1], "\tat foo");
}

#[test]
fn test_invalid_bytes_inside_name_do_not_break_header() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"worker-\xc3\" #7\n").unwrap();

    let threads = parse_dump_file(file.path()).unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].name, "worker-");
}

#[test]
fn test_name_of_only_invalid_bytes_is_not_header() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"\xff\" #1\n\tat org.springframework.web.client.RestTemplate.exchange(X)\n").unwrap();

    assert!(parse_dump_file(file.path()).unwrap().is_empty());
}

#[test]
fn test_cr_only_dump_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\"reactor-http-nio-1\"\r\tat x\r\"boundedElastic-1\"\r").unwrap();

    let threads = parse_dump_file(file.path()).unwrap();
    let names: Vec<&str> = threads.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["reactor-http-nio-1", "boundedElastic-1"]);
    assert_eq!(threads[0].line_count(), 2);
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone.txt");

    let err = read_dump(&missing).unwrap_err();
    assert!(matches!(err, ParseError::ReadFailed { .. }));
    assert!(err.to_string().contains("gone.txt"));
}
