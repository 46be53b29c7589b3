use jstack_analyzer::aggregator::FileReport;
use jstack_analyzer::output::{write_interpretation, write_report_table, TABLE_COLUMNS};
use pretty_assertions::assert_eq;

fn create_test_report(file: &str, threads_total: usize) -> FileReport {
    FileReport {
        file: file.to_string(),
        threads_total,
        reactor_threads: 4,
        reactor_rest_template_threads: 2,
        ..Default::default()
    }
}

#[test]
fn test_write_report_table() {
    let reports = vec![create_test_report("a.txt", 10), create_test_report("b.txt", 12)];
    let mut buf = Vec::new();

    write_report_table(&mut buf, &reports).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "file\tthreads_total\treactor_threads\treactor_socketRead_threads\treactor_restTemplate_threads\tboundedElastic_threads\tboundedElastic_restTemplate_threads\tany_restTemplate_threads\tany_socketRead_threads\n\
         a.txt\t10\t4\t0\t2\t0\t0\t0\t0\n\
         b.txt\t12\t4\t0\t2\t0\t0\t0\t0\n"
    );
}

#[test]
fn test_every_row_has_all_columns() {
    let mut buf = Vec::new();
    write_report_table(&mut buf, &[create_test_report("a.txt", 1)]).unwrap();

    for line in String::from_utf8(buf).unwrap().lines() {
        assert_eq!(line.split('\t').count(), TABLE_COLUMNS.len());
    }
}

#[test]
fn test_empty_table_has_header_only() {
    let mut buf = Vec::new();
    write_report_table(&mut buf, &[]).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
}

#[test]
fn test_interpretation_text_is_exact() {
    let mut buf = Vec::new();
    write_interpretation(&mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\n\
         Interpretation:\n\
         - reactor_restTemplate_threads > 0  => event-loop 正在被阻塞(坏)\n\
         - offload模式应当: reactor_restTemplate_threads ~= 0 且 boundedElastic_restTemplate_threads > 0\n\
         - reactor_socketRead_threads 高 => 常见是下游慢导致等待响应头/读阻塞\n"
    );
}
