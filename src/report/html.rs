use crate::report::escape_markup;

#[derive(Debug, Clone)]
pub struct HtmlReport<'a> {
    pub input_path: &'a str,
    pub n_tissues: usize,
    pub n_genes: usize,
    /// Heading prefix for the charts, e.g. "Top 10".
    pub top_label: &'a str,
    pub tissue_chart: &'a str,
    pub gene_chart: &'a str,
}

pub fn render_html_report(report: &HtmlReport<'_>) -> String {
    let top = escape_markup(report.top_label);
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<title>Expression Matrix Report</title>\n");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n\n");

    out.push_str("<div class=\"summary-box\">\n");
    out.push_str("<h1>Expression Matrix &mdash; Summary Report</h1>\n");
    out.push_str(&format!(
        "<p><strong>File:</strong> {}</p>\n",
        escape_markup(report.input_path)
    ));
    out.push_str(&format!(
        "<p><strong>Number of tissues / cells:</strong> {}</p>\n",
        report.n_tissues
    ));
    out.push_str(&format!(
        "<p><strong>Number of genes:</strong> {}</p>\n",
        report.n_genes
    ));
    out.push_str("</div>\n\n");

    out.push_str(&format!(
        "<h2>{top} tissues / cells by total read counts</h2>\n"
    ));
    out.push_str(&format!(
        "<div class=\"figure-box\">\n<img src=\"{}\" alt=\"{top} tissues / cells\">\n</div>\n\n",
        escape_markup(report.tissue_chart)
    ));

    out.push_str(&format!("<h2>{top} genes by total read counts</h2>\n"));
    out.push_str(&format!(
        "<div class=\"figure-box\">\n<img src=\"{}\" alt=\"{top} genes\">\n</div>\n\n",
        escape_markup(report.gene_chart)
    ));

    out.push_str("</body>\n</html>\n");
    out
}

const STYLE: &str = r#"<style>
body {
    font-family: Arial, sans-serif;
    margin: 40px;
}
h1 {
    margin-top: 0;
}
.summary-box {
    border: 2px solid black;
    background-color: #fde7ef;
    padding: 20px 25px;
    border-radius: 8px;
    max-width: 900px;
    margin-bottom: 40px;
}
.figure-box {
    border: 2px solid black;
    padding: 15px;
    border-radius: 8px;
    margin-bottom: 40px;
    max-width: 950px;
    overflow-x: auto;
}
img {
    max-width: 900px;
}
</style>
"#;
