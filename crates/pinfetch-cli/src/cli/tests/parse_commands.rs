//! Tests for install, verify, checksum, and url subcommand parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_install_defaults() {
    match parse(&["pinfetch", "install"]) {
        CliCommand::Install {
            version,
            sha256,
            cache_dir,
        } => {
            assert!(version.is_none());
            assert!(sha256.is_none());
            assert!(cache_dir.is_none());
        }
        _ => panic!("expected Install"),
    }
}

#[test]
fn cli_parse_install_pinned() {
    match parse(&[
        "pinfetch",
        "install",
        "--version",
        "0.12.4",
        "--sha256",
        "a9537853c7bbc2fa6ffb4b71899b44f3b49dd0a1f2d80819d89c581b961dcdde",
        "--cache-dir",
        "/tmp/cache",
    ]) {
        CliCommand::Install {
            version,
            sha256,
            cache_dir,
        } => {
            assert_eq!(version.as_deref(), Some("0.12.4"));
            assert_eq!(
                sha256.as_deref(),
                Some("a9537853c7bbc2fa6ffb4b71899b44f3b49dd0a1f2d80819d89c581b961dcdde")
            );
            assert_eq!(cache_dir.as_deref(), Some(Path::new("/tmp/cache")));
        }
        _ => panic!("expected Install with pin"),
    }
}

#[test]
fn cli_parse_verify() {
    match parse(&["pinfetch", "verify", "/tmp/file.tar.gz", "abc123"]) {
        CliCommand::Verify { path, sha256 } => {
            assert_eq!(path, Path::new("/tmp/file.tar.gz"));
            assert_eq!(sha256, "abc123");
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["pinfetch", "checksum", "/tmp/file.tar.gz"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, Path::new("/tmp/file.tar.gz"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_url() {
    match parse(&["pinfetch", "url"]) {
        CliCommand::Url { version } => assert!(version.is_none()),
        _ => panic!("expected Url"),
    }
    match parse(&["pinfetch", "url", "--version", "0.12.0"]) {
        CliCommand::Url { version } => assert_eq!(version.as_deref(), Some("0.12.0")),
        _ => panic!("expected Url with version"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["pinfetch", "frobnicate"]).is_err());
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["pinfetch"]).is_err());
}
