/*
[INPUT]:  Controller address and credentials from the environment
[OUTPUT]: Pools with their servers, health monitors and autoscale policies
[POS]:    Examples - read-only controller queries
[UPDATE]: When the resource API changes
*/

use alb_sdk::*;

/// Example: list pools and resolve their autoscale policy references
///
/// Reads `ALB_CONTROLLER`, `ALB_USERNAME` and `ALB_PASSWORD`.
#[tokio::main]
async fn main() {
    println!("=== Pool Listing Example ===\n");

    let controller = std::env::var("ALB_CONTROLLER").unwrap_or_else(|_| "127.0.0.1".to_string());
    let username = std::env::var("ALB_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ALB_PASSWORD").unwrap_or_default();

    let mut config = ClientConfig::new(controller);
    config.insecure = true;
    let client = match AviClient::new(config, Credentials::password(username, password)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pools = match client.resource::<Pool>().get_all(&ApiOptions::new()).await {
        Ok(pools) => pools,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ {} pools\n", pools.len());

    for pool in &pools {
        let algorithm = pool.lb_algorithm.as_deref().unwrap_or("default");
        println!("{} ({})", pool.name, algorithm);
        for server in &pool.servers {
            match server.port {
                Some(port) => println!("  server {}:{}", server.ip, port),
                None => println!("  server {}", server.ip),
            }
        }
        for hm in &pool.health_monitor_refs {
            if let Ok(reference) = ObjectRef::parse(hm) {
                println!("  health monitor {}", reference.name().unwrap_or(hm));
            }
        }
        if let Some(tenant_ref) = &pool.tenant_ref {
            println!("  tenant {}", tenant_from_ref(tenant_ref));
        }
        if let Some(policy_ref) = &pool.autoscale_policy_ref {
            match client.resolve_ref::<ServerAutoScalePolicy>(policy_ref).await {
                Ok(policy) => println!("  autoscale policy {}", policy.name),
                Err(e) => println!("  autoscale policy lookup failed: {}", e),
            }
        }
    }
}
