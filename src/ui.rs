use crate::models::FormSnapshot;
use crate::schema;

pub fn render_index(snapshot: &FormSnapshot) -> String {
    let form_json = serde_json::to_string(snapshot)
        .unwrap_or_else(|_| r#"{"fields":[],"in_flight":false}"#.to_string());
    INDEX_HTML
        .replace("{{FORM_JSON}}", &form_json)
        .replace("{{COLUMNS_JSON}}", &columns_json())
}

fn columns_json() -> String {
    let columns: Vec<serde_json::Value> = schema::COLUMNS
        .iter()
        .map(|column| serde_json::json!({ "value": column.value, "label": column.label }))
        .collect();
    serde_json::Value::Array(columns).to_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Productivity Optimizer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #ecfdf7;
      --bg-2: #bfe8e0;
      --ink: #1f2d2b;
      --accent: #0f766e;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(15, 118, 110, 0.16);
      --error: #c63b2b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f6f0 60%, #eef8f4 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      color: var(--accent);
    }

    .subtitle {
      margin: 4px 0 0;
      color: #55605d;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .panel {
      display: none;
    }

    .panel.active {
      display: grid;
      gap: 24px;
    }

    .field-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 16px;
    }

    .field {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .field .hint {
      margin: 0;
      font-size: 0.8rem;
      color: #8b857d;
    }

    .field input {
      width: 100%;
      padding: 10px 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      font: inherit;
      transition: border-color 150ms ease;
    }

    .field input:focus {
      outline: none;
      border-color: var(--accent);
    }

    .field.invalid input {
      border-color: var(--error);
    }

    .field .error {
      min-height: 1em;
      font-size: 0.8rem;
      color: var(--error);
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(15, 118, 110, 0.3);
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button.primary:active {
      transform: scale(0.98);
    }

    button.primary:disabled {
      background: #9aa6a3;
      box-shadow: none;
      cursor: not-allowed;
    }

    .result {
      display: none;
      border-radius: 20px;
      border: 2px solid;
      padding: 24px;
      text-align: center;
      animation: rise 400ms ease;
    }

    .result.visible {
      display: grid;
      gap: 12px;
    }

    .result h2 {
      margin: 0;
      font-size: 1.6rem;
    }

    .result .description {
      margin: 0;
      opacity: 0.8;
    }

    .result ul {
      margin: 0;
      padding-left: 20px;
      text-align: left;
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
    }

    .result.card-blue { background: #dbeafe; border-color: #93c5fd; color: #1e40af; }
    .result.card-green { background: #dcfce7; border-color: #86efac; color: #166534; }
    .result.card-purple { background: #f3e8ff; border-color: #d8b4fe; color: #6b21a8; }
    .result.card-yellow { background: #fef9c3; border-color: #fde047; color: #854d0e; }
    .result.card-indigo { background: #e0e7ff; border-color: #a5b4fc; color: #3730a3; }
    .result.card-red { background: #fee2e2; border-color: #fca5a5; color: #991b1b; }
    .result.card-plain { background: #f1f5f4; border-color: #cbd5d1; color: var(--accent-2); }

    .viz-controls {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
      align-items: end;
    }

    .viz-controls .control {
      display: grid;
      gap: 6px;
    }

    .viz-controls label {
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .viz-controls select {
      padding: 10px 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      font: inherit;
      background: white;
    }

    .viz-controls select:disabled {
      background: #eef1f0;
      color: #9aa6a3;
    }

    .suggestions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .suggestions button {
      appearance: none;
      border: 1px solid rgba(15, 118, 110, 0.3);
      background: white;
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.8rem;
      cursor: pointer;
    }

    .viz-error {
      display: none;
      padding: 12px 16px;
      border-radius: 12px;
      background: #fee2e2;
      border: 1px solid #fca5a5;
      color: #991b1b;
      font-size: 0.9rem;
    }

    .viz-error.visible {
      display: block;
    }

    .chart-card {
      display: none;
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart-card.visible {
      display: block;
    }

    .chart-card img {
      width: 100%;
      border-radius: 12px;
      display: block;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--error);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button.primary {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Productivity Optimizer</h1>
        <p class="subtitle">Discover what activity will make you most productive right now.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" data-panel="predict" type="button">Get Recommendation</button>
        <button class="tab" data-panel="visualize" type="button">Visualize Data</button>
      </div>
    </header>

    <section id="panel-predict" class="panel active">
      <div id="field-grid" class="field-grid"></div>
      <button id="submit-btn" class="primary" type="button">Get My Productivity Recommendation</button>
      <div id="result" class="result"></div>
    </section>

    <section id="panel-visualize" class="panel">
      <div class="viz-controls">
        <div class="control">
          <label for="graph-type">Graph Type</label>
          <select id="graph-type">
            <option value="histogram">Histogram</option>
            <option value="bar">Bar Chart</option>
            <option value="scatter">Scatter Plot</option>
            <option value="heatmap">Correlation Heatmap</option>
          </select>
        </div>
        <div class="control">
          <label id="column1-label" for="column1">Column</label>
          <select id="column1"></select>
        </div>
        <div class="control">
          <label for="column2">Y-Axis (Secondary)</label>
          <select id="column2"></select>
        </div>
        <button id="viz-btn" class="primary" type="button">Generate Graph</button>
      </div>
      <div id="suggestions" class="suggestions"></div>
      <div id="viz-error" class="viz-error"></div>
      <div id="chart-card" class="chart-card">
        <img id="chart-img" alt="Generated chart" />
      </div>
    </section>

    <p id="status" class="status"></p>
  </main>

  <script>
    const initialForm = {{FORM_JSON}};
    const columns = {{COLUMNS_JSON}};

    const suggestions = {
      histogram: [
        { column1: 'TaskType', desc: 'Task type distribution' },
        { column1: 'Mood', desc: 'Mood distribution' },
        { column1: 'SleepHours', desc: 'Sleep distribution' }
      ],
      bar: [
        { column1: 'TaskType', column2: 'Mood', desc: 'Average mood by task type' },
        { column1: 'DayOfWeek', column2: 'SleepHours', desc: 'Sleep patterns by day' },
        { column1: 'TaskType', column2: 'Duration', desc: 'Time spent on each activity' }
      ],
      scatter: [
        { column1: 'Mood', column2: 'ConfidenceScore', desc: 'Mood vs confidence' },
        { column1: 'SleepHours', column2: 'Mood', desc: 'Sleep impact on mood' },
        { column1: 'Distractions', column2: 'Completed', desc: 'Distraction vs productivity' }
      ],
      heatmap: []
    };

    const statusLine = document.getElementById('status');
    const setStatus = (text, type) => {
      statusLine.textContent = text;
      statusLine.dataset.type = type || '';
    };

    const tabs = document.querySelectorAll('.tab');
    tabs.forEach((tab) => {
      tab.addEventListener('click', () => {
        tabs.forEach((other) => other.classList.toggle('active', other === tab));
        document.querySelectorAll('.panel').forEach((panel) => {
          panel.classList.toggle('active', panel.id === 'panel-' + tab.dataset.panel);
        });
      });
    });

    // --- Recommendation form -------------------------------------------

    const fieldGrid = document.getElementById('field-grid');
    const submitBtn = document.getElementById('submit-btn');
    const resultCard = document.getElementById('result');
    const fieldErrors = {};
    let predicting = false;

    const refreshSubmitState = () => {
      const hasErrors = Object.values(fieldErrors).some((error) => error !== null);
      submitBtn.disabled = predicting || hasErrors;
    };

    const renderFieldError = (key, error) => {
      fieldErrors[key] = error;
      const field = document.querySelector('.field[data-key="' + CSS.escape(key) + '"]');
      if (field) {
        field.classList.toggle('invalid', error !== null);
        field.querySelector('.error').textContent = error || '';
      }
      refreshSubmitState();
    };

    const editField = async (key, value) => {
      const res = await fetch('/api/form/field', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ key, value })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Failed to update field');
      }
      const state = await res.json();
      renderFieldError(state.key, state.error);
    };

    initialForm.fields.forEach((field) => {
      fieldErrors[field.key] = field.error;

      const wrapper = document.createElement('div');
      wrapper.className = 'field' + (field.error ? ' invalid' : '');
      wrapper.dataset.key = field.key;

      const label = document.createElement('label');
      label.textContent = field.label;
      const hint = document.createElement('p');
      hint.className = 'hint';
      hint.textContent = field.description;

      const input = document.createElement('input');
      input.type = 'number';
      input.min = field.min;
      input.max = field.max;
      input.step = 'any';
      input.value = field.value;
      input.addEventListener('change', () => {
        editField(field.key, input.value).catch((err) => setStatus(err.message, 'error'));
      });

      const error = document.createElement('p');
      error.className = 'error';
      error.textContent = field.error || '';

      wrapper.append(label, hint, input, error);
      fieldGrid.append(wrapper);
    });
    refreshSubmitState();

    const renderResult = (body) => {
      resultCard.className = 'result visible';
      resultCard.replaceChildren();

      const title = document.createElement('h2');
      const description = document.createElement('p');
      description.className = 'description';

      if (body.activity) {
        resultCard.classList.add('card-' + body.activity.accent);
        title.textContent = 'Recommended Activity: ' + body.activity.name;
        description.textContent = body.activity.description;

        const tips = document.createElement('ul');
        body.activity.tips.forEach((tip) => {
          const item = document.createElement('li');
          item.textContent = tip;
          tips.append(item);
        });
        resultCard.append(title, description, tips);
      } else {
        resultCard.classList.add('card-plain');
        title.textContent = 'Recommended activity class ' + body.prediction;
        description.textContent = 'No details available for this recommendation.';
        resultCard.append(title, description);
      }
    };

    submitBtn.addEventListener('click', async () => {
      predicting = true;
      submitBtn.textContent = 'Analyzing...';
      refreshSubmitState();
      setStatus('', '');

      try {
        const res = await fetch('/api/form/submit', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Failed to get prediction. Please try again.');
        }
        renderResult(await res.json());
      } catch (err) {
        resultCard.className = 'result';
        setStatus(err.message, 'error');
      } finally {
        predicting = false;
        submitBtn.textContent = 'Get My Productivity Recommendation';
        refreshSubmitState();
      }
    });

    // --- Visualization -------------------------------------------------

    const graphType = document.getElementById('graph-type');
    const column1 = document.getElementById('column1');
    const column2 = document.getElementById('column2');
    const column1Label = document.getElementById('column1-label');
    const vizBtn = document.getElementById('viz-btn');
    const vizError = document.getElementById('viz-error');
    const chartCard = document.getElementById('chart-card');
    const chartImg = document.getElementById('chart-img');
    const suggestionBox = document.getElementById('suggestions');
    let chartUrl = null;
    let rendering = false;

    columns.forEach((column) => {
      for (const select of [column1, column2]) {
        const option = document.createElement('option');
        option.value = column.value;
        option.textContent = column.label;
        select.append(option);
      }
    });
    column2.value = 'Mood';

    const needsSecondColumn = () => graphType.value === 'bar' || graphType.value === 'scatter';

    const renderSuggestions = () => {
      suggestionBox.replaceChildren();
      suggestions[graphType.value].forEach((suggestion) => {
        const chip = document.createElement('button');
        chip.type = 'button';
        chip.textContent = suggestion.desc;
        chip.addEventListener('click', () => {
          column1.value = suggestion.column1;
          if (suggestion.column2) {
            column2.value = suggestion.column2;
          }
        });
        suggestionBox.append(chip);
      });
    };

    const refreshVizControls = () => {
      column2.disabled = !needsSecondColumn();
      column1Label.textContent = graphType.value === 'histogram' ? 'Column' : 'X-Axis (Primary)';
      renderSuggestions();
    };
    graphType.addEventListener('change', refreshVizControls);
    refreshVizControls();

    vizBtn.addEventListener('click', async () => {
      if (rendering) {
        return;
      }
      rendering = true;
      vizBtn.disabled = true;
      vizBtn.textContent = 'Rendering...';
      vizError.className = 'viz-error';
      chartCard.className = 'chart-card';

      try {
        const res = await fetch('/api/visualize', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            graphType: graphType.value,
            column1: column1.value,
            column2: needsSecondColumn() ? column2.value : null
          })
        });

        if (!res.ok) {
          throw new Error(await res.text() || 'Failed to generate graph');
        }

        const blob = await res.blob();
        if (chartUrl) {
          URL.revokeObjectURL(chartUrl);
        }
        chartUrl = URL.createObjectURL(blob);
        chartImg.src = chartUrl;
        chartCard.className = 'chart-card visible';
      } catch (err) {
        vizError.textContent = err.message;
        vizError.className = 'viz-error visible';
      } finally {
        rendering = false;
        vizBtn.disabled = false;
        vizBtn.textContent = 'Generate Graph';
      }
    });
  </script>
</body>
</html>
"#;
