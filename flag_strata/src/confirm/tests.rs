use std::io::{self, Cursor, Read, Write};

use clap::{Arg, ArgAction, Command};
use rstest::rstest;

use super::*;

fn group() -> Command {
    Command::new("prog")
        .arg(Arg::new("name").long("name").default_value("world"))
        .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
        .arg(Arg::new("tag").long("tag").action(ArgAction::Append))
        .arg(Arg::new("unset").long("unset"))
}

fn run(answer: &[u8]) -> (bool, String) {
    let mut cmd = group();
    let matches = cmd
        .try_get_matches_from_mut(["prog", "--tag", "a", "--tag", "b"])
        .expect("arguments parse");
    let mut output = Vec::new();
    let accepted = confirm_with(&[(&cmd, &matches)], Cursor::new(answer), &mut output);
    (accepted, String::from_utf8(output).expect("utf-8 output"))
}

#[rstest]
#[case(b"y\n", true)]
#[case(b"Y\n", true)]
#[case(b"yes\n", true)]
#[case(b"YeS\r\n", true)]
#[case(b"  yes  \n", true)]
#[case(b"yes", true)]
#[case(b"\n", false)]
#[case(b"no\n", false)]
#[case(b"yess\n", false)]
#[case(b"ye\n", false)]
#[case(b"yes please\n", false)]
#[case(b"", false)]
fn accepts_only_yes(#[case] answer: &[u8], #[case] expected: bool) {
    assert_eq!(run(answer).0, expected);
}

#[test]
fn prints_every_setting_then_prompts() {
    let (_, output) = run(b"no\n");
    assert_eq!(
        output,
        format!("\tname = world\n\tverbose = false\n\ttag = a,b\n\tunset = \n\n{PROMPT}")
    );
}

#[test]
fn prints_settings_of_every_group() {
    let mut first = group();
    let mut second = Command::new("other").arg(Arg::new("level").long("level").default_value("3"));
    let first_matches = first
        .try_get_matches_from_mut(["prog"])
        .expect("first group parses");
    let second_matches = second
        .try_get_matches_from_mut(["other"])
        .expect("second group parses");
    let mut output = Vec::new();
    let accepted = confirm_with(
        &[(&first, &first_matches), (&second, &second_matches)],
        Cursor::new(b"y\n"),
        &mut output,
    );
    assert!(accepted);
    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.contains("\tname = world\n"), "{text}");
    assert!(text.contains("\tlevel = 3\n"), "{text}");
    assert!(!text.contains("help"), "{text}");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("stderr closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unreadable_answer_is_a_refusal() {
    let mut cmd = group();
    let matches = cmd
        .try_get_matches_from_mut(["prog"])
        .expect("arguments parse");
    let input = io::BufReader::new(FailingReader);
    assert!(!confirm_with(&[(&cmd, &matches)], input, Vec::new()));
}

#[test]
fn unwritable_summary_is_a_refusal() {
    let mut cmd = group();
    let matches = cmd
        .try_get_matches_from_mut(["prog"])
        .expect("arguments parse");
    assert!(!confirm_with(
        &[(&cmd, &matches)],
        Cursor::new(b"yes\n"),
        FailingWriter
    ));
}
