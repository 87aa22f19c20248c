//! Single-page UI for triggering and displaying brand analyses.

use axum::response::Html;

/// GET / - Serve the monitoring page.
///
/// The page is self-contained: markup, styling, and the fetch script live in
/// one embedded document. It needs no credentials and works even when the
/// analysis endpoint is failing; upstream errors are rendered from the
/// response's `detail` field.
pub async fn serve_ui() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Brand & Influencer Monitoring</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; margin: 50px; }
        input { padding: 10px; margin: 10px; width: 300px; }
        button { padding: 10px; background: blue; color: white; border: none; cursor: pointer; }
        #results { margin-top: 20px; text-align: left; }
        .error { color: #b00020; }
    </style>
</head>
<body>
    <h1>Brand & Influencer Monitoring</h1>
    <input type="text" id="brand" placeholder="Enter brand or person name">
    <button onclick="fetchBrandAnalysis()">Analyze</button>
    <div id="results"></div>
    <script>
        async function fetchBrandAnalysis() {
            const brand = document.getElementById('brand').value;
            const results = document.getElementById('results');
            results.innerHTML = "<p>Analyzing...</p>";

            let response;
            try {
                response = await fetch('/monitor-brand/', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ brand_name: brand })
                });
            } catch (e) {
                results.innerHTML = `<p class="error">Request failed: ${e}</p>`;
                return;
            }

            if (!response.ok) {
                let detail = `HTTP ${response.status}`;
                try {
                    const body = await response.json();
                    if (body.detail) detail = body.detail;
                } catch (e) { /* keep the status line */ }
                results.innerHTML = `<p class="error">${detail}</p>`;
                return;
            }

            const data = await response.json();

            let resultsHTML = "<h2>Results:</h2>";
            resultsHTML += `<h3>Latest Articles:</h3>`;
            data.top_articles.forEach(article => {
                resultsHTML += `<p><strong>${article.title}</strong><br>`;
                resultsHTML += `<a href="${article.url}" target="_blank">Read Article</a></p>`;
            });

            resultsHTML += `<h3>Top Influencers:</h3>`;
            data.influencers.forEach(influencer => {
                resultsHTML += `<p><strong>${influencer.name}</strong><br>`;
                resultsHTML += `Platform: ${influencer.platform}<br>`;
                resultsHTML += `Engagement Score: ${influencer.engagement_score}<br>`;
                resultsHTML += `<a href="${influencer.profile_link}" target="_blank">View Profile</a></p>`;
            });

            results.innerHTML = resultsHTML;
        }
    </script>
</body>
</html>
"#;
