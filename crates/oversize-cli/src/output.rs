//! Output formatting module

use oversize_app::tool::{PackageCheckTool, ToolResponse};
use oversize_domain::service::format_quantity;
use oversize_types::{OutputFormat, Result};

pub fn output_response(
    output_format: OutputFormat,
    tool: &PackageCheckTool,
    response: &ToolResponse,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", tool.render(response));
        return Ok(());
    }

    println!("{}", render_table(response));
    Ok(())
}

fn render_table(response: &ToolResponse) -> String {
    let mut out = String::new();
    out.push_str("Package Check Result\n");
    out.push_str("====================\n");
    match response {
        ToolResponse::Rejected(payload) => {
            out.push_str("Oversized:        No\n");
            out.push_str(&format!("Error:            {}\n", payload.error));
        }
        ToolResponse::Evaluated(result) => {
            out.push_str(&format!(
                "Oversized:        {}\n",
                if result.oversized { "Yes" } else { "No" }
            ));
            out.push_str(&format!("Length:           {} in\n", format_quantity(result.length)));
            out.push_str(&format!("Width:            {} in\n", format_quantity(result.width)));
            out.push_str(&format!("Height:           {} in\n", format_quantity(result.height)));
            out.push_str(&format!("Weight:           {} g\n", format_quantity(result.weight)));
            out.push_str(&format!(
                "Total dimensions: {} in\n",
                format_quantity(result.total_dimensions)
            ));
            out.push_str("\nReasoning:\n");
            for reason in &result.reasoning {
                out.push_str(&format!("  - {}\n", reason));
            }
        }
    }
    out
}
