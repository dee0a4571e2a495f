use anatomy_config::AnatomyConfig;
use anatomy_session::RouteDecision;
use anatomy_session::navigation::gate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct RouteResponse {
    path: String,
    maintenance_mode: bool,
    rewritten: bool,
    target: String,
}

pub fn handle(args: &RouteArgs, config: &AnatomyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&route_response(&args.path, config), flags.format)
}

fn route_response(path: &str, config: &AnatomyConfig) -> RouteResponse {
    let maintenance_mode = config.general.maintenance_mode;
    let (rewritten, target) = match gate(path, maintenance_mode, &config.routes.maintenance) {
        RouteDecision::Pass => (false, path.to_string()),
        RouteDecision::Rewrite(target) => (true, target),
    };
    RouteResponse {
        path: path.to_string(),
        maintenance_mode,
        rewritten,
        target,
    }
}
