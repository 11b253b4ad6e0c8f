//! Parsers for nmap's normal (human-readable) output.
//!
//! Only two line shapes matter:
//!
//! ```text
//! Nmap scan report for 192.168.0.5
//! 80/tcp   open  http    Apache httpd 2.4.41 ((Ubuntu))
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use vulnscout_core::{HostAddress, ServiceRecord};

const REPORT_MARKER: &str = "Nmap scan report for ";

// port, service token, version text (may contain spaces)
static OPEN_PORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)/tcp\s+open\s+(\S+)\s+(\S.*?)\s*$").expect("open port regex")
});

/// Hosts listed by a ping sweep, in output order
#[must_use]
pub fn parse_hosts(output: &str) -> Vec<HostAddress> {
    output
        .lines()
        .filter_map(|line| {
            let start = line.find(REPORT_MARKER)? + REPORT_MARKER.len();
            let address = line[start..].trim();
            (!address.is_empty()).then(|| HostAddress::new(address))
        })
        .collect()
}

/// Open TCP services with version text, in output order
#[must_use]
pub fn parse_services(output: &str) -> Vec<ServiceRecord> {
    output.lines().filter_map(parse_service_line).collect()
}

fn parse_service_line(line: &str) -> Option<ServiceRecord> {
    let caps = OPEN_PORT_RE.captures(line)?;
    let port = caps[1].parse().ok()?;
    Some(ServiceRecord::new(port, &caps[2], &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING_SWEEP: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2024-03-02 10:14 CET
Nmap scan report for router.lan (192.168.0.1)
Host is up (0.0021s latency).
Nmap scan report for 192.168.0.5
Host is up (0.00030s latency).
Nmap scan report for 192.168.0.23
Host is up (0.011s latency).
Nmap done: 256 IP addresses (3 hosts up) scanned in 2.51 seconds
";

    const VERSION_SCAN: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2024-03-02 10:15 CET
Nmap scan report for 192.168.0.5
Host is up (0.00028s latency).
Not shown: 96 closed tcp ports (conn-refused)
PORT     STATE    SERVICE     VERSION
22/tcp   open     ssh         OpenSSH 8.2p1 Ubuntu 4ubuntu0.5 (Ubuntu Linux; protocol 2.0)
80/tcp   open     http        Apache httpd 2.4.41 ((Ubuntu))
139/tcp  filtered netbios-ssn
443/tcp  closed   https
8080/tcp open     http-proxy
9090/tcp open|filtered zeus-admin
Service Info: OS: Linux; CPE: cpe:/o:linux:linux_kernel

Service detection performed. Please report any incorrect results at https://nmap.org/submit/ .
Nmap done: 1 IP address (1 host up) scanned in 12.40 seconds
";

    #[test]
    fn no_report_lines_no_hosts() {
        assert!(parse_hosts("").is_empty());
        assert!(parse_hosts("Nmap done: 256 IP addresses (0 hosts up) scanned in 3.02 seconds").is_empty());
    }

    #[test]
    fn single_report_line() {
        let hosts = parse_hosts("Nmap scan report for 192.168.0.5");
        assert_eq!(hosts, vec![HostAddress::from("192.168.0.5")]);
    }

    #[test]
    fn hosts_in_output_order() {
        let hosts = parse_hosts(PING_SWEEP);
        let hosts: Vec<&str> = hosts.iter().map(HostAddress::as_str).collect();
        assert_eq!(
            hosts,
            ["router.lan (192.168.0.1)", "192.168.0.5", "192.168.0.23"]
        );
    }

    #[test]
    fn open_port_with_version() {
        let services = parse_services("80/tcp   open  http    Apache 2.4.41");
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].port_label(), "80/tcp");
        assert_eq!(services[0].name, "http");
        assert_eq!(services[0].version, "Apache 2.4.41");
    }

    #[test]
    fn closed_port_is_ignored() {
        assert!(parse_services("443/tcp closed https").is_empty());
    }

    #[test]
    fn full_version_scan() {
        let services = parse_services(VERSION_SCAN);
        assert_eq!(
            services,
            vec![
                ServiceRecord::new(
                    22,
                    "ssh",
                    "OpenSSH 8.2p1 Ubuntu 4ubuntu0.5 (Ubuntu Linux; protocol 2.0)"
                ),
                ServiceRecord::new(80, "http", "Apache httpd 2.4.41 ((Ubuntu))"),
            ]
        );
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let services = parse_services("21/tcp open ftp vsftpd 3.0.3   \r\n");
        assert_eq!(services[0].version, "vsftpd 3.0.3");
    }

    #[test]
    fn padded_line_without_version_is_ignored() {
        assert!(parse_services("8080/tcp open  http-proxy   ").is_empty());
        assert!(parse_services("8080/tcp open     http-proxy\t \r\n").is_empty());
    }

    #[test]
    fn out_of_range_port_is_skipped() {
        assert!(parse_services("99999/tcp open http nginx 1.18.0").is_empty());
    }
}
