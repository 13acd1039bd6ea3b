use std::sync::Arc;

use shopfeed_core::PageSource;
use shopfeed_data::{generate_catalog, CatalogFile};
use shopfeed_domain::{total_price, Product};

use crate::cli::{GenerateArgs, PeekArgs};
use crate::output;

pub fn handle_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let file = CatalogFile::new(generate_catalog(args.count));
    std::fs::write(&args.output, file.to_json_string()?)?;
    tracing::info!(path = %args.output.display(), count = args.count, "wrote catalog file");

    output::output_success(serde_json::json!({
        "written": args.output.display().to_string(),
        "count": args.count,
    }));
    Ok(())
}

pub async fn handle_peek(
    source: Arc<dyn PageSource<Product>>,
    args: PeekArgs,
) -> anyhow::Result<()> {
    let page = source.fetch_page(args.page).await?;

    output::output_success(serde_json::json!({
        "page": args.page,
        "count": page.items.len(),
        "end_of_data": page.end_of_data,
        "page_total": total_price(&page.items),
        "items": page.items,
    }));
    Ok(())
}
