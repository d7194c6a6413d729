//! Runs the built binary and checks the printed report's shape against
//! what the host guarantees.

use std::process::Command;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[test]
fn test_report_shape_on_host() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpuprobe"))
        .output()
        .expect("probe binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("report is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "report is exactly six lines: {:?}", lines);

    // "<vendor>,  maxcall <n>" with two spaces and a decimal count.
    let (vendor, maxcall) = lines[0]
        .split_once(",  maxcall ")
        .expect("first line carries the maxcall separator");
    assert_eq!(vendor.len(), 12);
    assert!(maxcall.parse::<u32>().expect("maxcall is decimal") >= 1);

    for (line, label) in lines[1..]
        .iter()
        .zip(["SSE2", "SSE42", "AVX", "AVX2", "AVX512F"])
    {
        let value = line
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(' '))
            .expect("feature line is `<label> <value>`");
        assert!(value == "0" || value == "1", "bad value in {:?}", line);
    }
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_baseline_features_reported_present() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpuprobe"))
        .output()
        .expect("probe binary runs");
    let stdout = String::from_utf8(output.stdout).expect("report is UTF-8");

    // SSE2 is architectural baseline for x86_64.
    assert!(stdout.contains("\nSSE2 1\n"));
}
