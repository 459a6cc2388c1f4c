use crate::heatmap::Heatmap;
use crate::palette::Intensity;

pub fn render_index(heatmap: &Heatmap, error: Option<&str>) -> String {
    let (status, status_type) = match error {
        Some(message) => (escape_html(message), "error"),
        None => (String::new(), ""),
    };

    INDEX_HTML
        .replace("{{POINT_COUNT}}", &heatmap.points().len().to_string())
        .replace("{{LEGEND}}", &legend())
        .replace("{{HEATMAP}}", &heatmap.svg())
        .replace("{{STATUS_TYPE}}", status_type)
        .replace("{{STATUS}}", &status)
}

fn legend() -> String {
    [
        Intensity::Empty,
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Max,
    ]
    .iter()
    .map(|level| format!(r#"<span class="swatch" style="background: {}"></span>"#, level.color()))
    .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Heatmap</title>
  <style>
    :root {
      --bg: #f6f8fa;
      --ink: #24292f;
      --muted: #57606a;
      --accent: #239a3b;
      --card: #ffffff;
      --shadow: 0 16px 40px rgba(36, 41, 47, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .surface {
      position: relative;
      overflow: auto;
    }

    #heatmap-surface {
      display: block;
    }

    .legend {
      display: flex;
      align-items: center;
      gap: 4px;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .swatch {
      width: 14px;
      height: 14px;
      border-radius: 3px;
      display: inline-block;
    }

    #tooltip {
      position: fixed;
      pointer-events: none;
      background: rgba(36, 41, 47, 0.92);
      color: white;
      padding: 6px 10px;
      border-radius: 6px;
      font-size: 0.85rem;
      white-space: nowrap;
    }

    #tooltip[hidden] {
      display: none;
    }

    form {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input {
      font: inherit;
      padding: 8px 10px;
      border: 1px solid #d0d7de;
      border-radius: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #cf222e;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Activity Heatmap</h1>
      <p class="subtitle"><span id="point-count">{{POINT_COUNT}}</span> data points by month and weekday.</p>
    </header>

    <section class="surface">
      {{HEATMAP}}
      <div id="tooltip" hidden></div>
    </section>

    <div class="legend">Less {{LEGEND}} More</div>

    <form id="point-form" method="post" action="/points">
      <label>Date
        <input type="date" name="date" required />
      </label>
      <label>Count
        <input type="number" name="count" min="0" step="1" required />
      </label>
      <button type="submit">Add point</button>
    </form>

    <div class="status" id="status" data-type="{{STATUS_TYPE}}">{{STATUS}}</div>
  </main>

  <script>
    const surface = document.getElementById('heatmap-surface');
    const tooltipEl = document.getElementById('tooltip');

    const showTooltip = (tooltip) => {
      if (!tooltip.visible) {
        tooltipEl.hidden = true;
        return;
      }
      tooltipEl.textContent = tooltip.text;
      tooltipEl.style.left = `${tooltip.x}px`;
      tooltipEl.style.top = `${tooltip.y}px`;
      tooltipEl.hidden = false;
    };

    surface.addEventListener('mousemove', (event) => {
      const rect = surface.getBoundingClientRect();
      const params = new URLSearchParams({
        x: event.clientX - rect.left,
        y: event.clientY - rect.top,
        client_x: event.clientX,
        client_y: event.clientY
      });
      fetch(`/api/tooltip?${params}`)
        .then((res) => (res.ok ? res.json() : { visible: false }))
        .then(showTooltip)
        .catch((err) => console.error('tooltip lookup failed', err));
    });

    surface.addEventListener('mouseleave', () => {
      tooltipEl.hidden = true;
    });
  </script>
</body>
</html>
"#;
