//! Example: Split a few authorities and check their hosts against local interfaces.

use netkit_core::{AddrService, HostPort, InterfaceLister, SplitPolicy};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let authorities = [
        "127.0.0.1:8080",
        "[::1]:443",
        "localhost:8.0",
        "[fe80::1%lo0]",
        "example.com",
    ];

    println!(
        "{:<20} {:<8} {:<16} {:<8} {}",
        "AUTHORITY", "POLICY", "HOST", "PORT", "LOCAL"
    );
    println!("{}", "-".repeat(64));

    let service = AddrService::new(InterfaceLister::new());

    for authority in authorities {
        for policy in SplitPolicy::ALL {
            let parts = HostPort::split(authority, policy);
            let local = match service.ip_is_on(parts.host).await {
                Ok(true) => "yes".to_string(),
                Ok(false) => "no".to_string(),
                Err(e) => format!("({})", e),
            };

            println!(
                "{:<20} {:<8} {:<16} {:<8} {}",
                authority, policy, parts.host, parts.port, local
            );
        }
    }
}
