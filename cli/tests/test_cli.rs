#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    use tempfile::tempdir;

    // mess=01 08 12345678 <crc32 of 12 34 56 78>
    const GOOD: &str = "mess=0108123456784A090E98mask=00FF00FF\nmess=0205AB";

    fn hexframe(args: &[&Path], extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hexframe"))
            .args(args)
            .args(extra)
            .env("RUST_LOG", "off")
            .output()
            .expect("binary runs")
    }

    #[test]
    fn empty_input_succeeds() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "").unwrap();

        let out = hexframe(&[&input, &output], &[]);
        assert!(out.status.success());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn checksum_failure_exits_with_one() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "mess=010812345678AABBCCDDmask=FFFFFFFF").unwrap();

        let out = hexframe(&[&input, &output], &[]);
        assert_eq!(out.status.code(), Some(1));

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.contains("[0] Original message:"));
        assert!(report.contains("[Message Error] Message checksum check failure"));
        assert!(String::from_utf8_lossy(&out.stderr).contains("hexframe:"));
    }

    #[test]
    fn truncated_second_frame_fails_after_first() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, GOOD).unwrap();

        let out = hexframe(&[&input, &output], &[]);
        assert_eq!(out.status.code(), Some(1));

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.contains("[0] Updated message:"));
        assert!(report.contains("[System Error] File length error"));
    }

    #[test]
    fn json_report_and_telemetry_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.jsonl");
        let telemetry = dir.path().join("telemetry.json");
        fs::write(&input, "mess=0108123456784A090E98mask=00FF00FF\n").unwrap();

        let out = hexframe(
            &[&input, &output],
            &["--format", "json", "--telemetry", telemetry.to_str().unwrap()],
        );
        assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

        let report = fs::read_to_string(&output).unwrap();
        let kinds: Vec<String> = report
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["event"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(kinds, ["frame", "mask", "frame", "summary"]);

        let t: serde_json::Value = serde_json::from_str(&fs::read_to_string(&telemetry).unwrap()).unwrap();
        assert_eq!(t["counters"]["frames_transformed"], 1);
    }

    #[test]
    fn missing_input_exits_with_one() {
        let dir = tempdir().unwrap();
        let out = hexframe(&[&dir.path().join("absent.txt"), &dir.path().join("out.txt")], &[]);
        assert_eq!(out.status.code(), Some(1));
    }

    #[test]
    fn missing_arguments_are_rejected() {
        let out = Command::new(env!("CARGO_BIN_EXE_hexframe")).output().unwrap();
        assert!(!out.status.success());
    }
}
