//! Embedded single-page UI.

/// The whole presentation layer: configuration form, progress indicator,
/// result panels, download link, and feedback buttons, wired to the JSON
/// API and the SSE progress stream.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Pressroom</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  fieldset { border: 1px solid #ccc; border-radius: 6px; margin-bottom: 1rem; }
  label { display: block; margin: 0.5rem 0 0.15rem; font-size: 0.9rem; }
  input[type=text], input[type=password], select { width: 100%; padding: 0.4rem; box-sizing: border-box; }
  button { padding: 0.5rem 1rem; margin-top: 0.75rem; cursor: pointer; }
  button:disabled { cursor: not-allowed; opacity: 0.5; }
  progress { width: 100%; height: 1.2rem; }
  #status { font-size: 0.9rem; color: #444; min-height: 1.2rem; }
  .panel { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-top: 1rem; white-space: pre-wrap; }
  .error { color: #a00; }
  .hidden { display: none; }
</style>
</head>
<body>
<h1>&#128240; Pressroom</h1>
<p>Automatically research, analyze, summarize, and write articles.</p>

<fieldset>
  <legend>Settings</legend>
  <label for="llm-key">LLM API Key</label>
  <input type="password" id="llm-key">
  <label for="search-key">Search API Key</label>
  <input type="password" id="search-key">
  <label for="model">AI Model</label>
  <select id="model">
    <option value="fast">gpt-3.5-turbo (Fast)</option>
    <option value="high-quality">gpt-4o (High Quality)</option>
  </select>
  <label for="length">Article Length (words): <span id="length-value">500</span></label>
  <input type="range" id="length" min="300" max="1000" step="100" value="500">
  <label for="sources">Number of Sources: <span id="sources-value">3</span></label>
  <input type="range" id="sources" min="2" max="5" value="3">
  <label><input type="checkbox" id="show-intermediates"> Show Intermediate Results</label>
  <label for="style">Article Style</label>
  <select id="style">
    <option>Informative</option>
    <option>Persuasive</option>
    <option>Narrative</option>
    <option>Analytical</option>
    <option>Conversational</option>
  </select>
  <label for="audience">Target Audience (Optional)</label>
  <input type="text" id="audience" placeholder="e.g., General public, Students, Professionals">
</fieldset>

<label for="topic">Enter the topic you want an article on:</label>
<input type="text" id="topic">
<button id="generate" disabled>Generate Article</button>

<progress id="progress" max="100" value="0"></progress>
<div id="status"></div>

<div id="research-panel" class="panel hidden"></div>
<div id="analysis-panel" class="panel hidden"></div>
<div id="article-panel" class="panel hidden"></div>

<div id="actions" class="hidden">
  <a id="download" href="/download">Download Article</a>
  <div>
    <button data-rating="great">&#128077; Great Article!</button>
    <button data-rating="good">&#128076; Good but could be better</button>
    <button data-rating="needs-improvement">&#128078; Needs improvement</button>
  </div>
  <div id="feedback-message"></div>
</div>

<script>
const el = (id) => document.getElementById(id);

el('length').addEventListener('input', () => el('length-value').textContent = el('length').value);
el('sources').addEventListener('input', () => el('sources-value').textContent = el('sources').value);

function refreshGate() {
  const ready = el('llm-key').value && el('search-key').value && el('topic').value.trim();
  el('generate').disabled = !ready;
}
['llm-key', 'search-key', 'topic'].forEach((id) => el(id).addEventListener('input', refreshGate));

const events = new EventSource('/events');
events.addEventListener('progress', (e) => {
  const p = JSON.parse(e.data);
  el('progress').value = p.percent;
  el('status').textContent = 'Current Step: ' + p.stage + ' - ' + p.message;
});

el('generate').addEventListener('click', async () => {
  el('generate').disabled = true;
  el('status').classList.remove('error');
  el('progress').value = 0;
  el('status').textContent = 'Current Step: Starting - Initializing article generation process...';

  try {
    let resp = await fetch('/credentials', {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        llm_api_key: el('llm-key').value,
        search_api_key: el('search-key').value,
      }),
    });
    if (!resp.ok) throw new Error('failed to install credentials');

    resp = await fetch('/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        topic: el('topic').value.trim(),
        model: el('model').value,
        target_word_count: parseInt(el('length').value, 10),
        source_count: parseInt(el('sources').value, 10),
        style: el('style').value,
        audience: el('audience').value || null,
      }),
    });
    const body = await resp.json();
    if (!resp.ok) throw new Error(body.error || 'generation failed');

    if (el('show-intermediates').checked) {
      el('research-panel').textContent = 'Research Results:\n\n' + body.research;
      el('research-panel').classList.remove('hidden');
      el('analysis-panel').textContent = 'Analysis Results:\n\n' + body.analysis;
      el('analysis-panel').classList.remove('hidden');
    }
    el('article-panel').textContent = body.article;
    el('article-panel').classList.remove('hidden');
    el('actions').classList.remove('hidden');
  } catch (err) {
    el('status').textContent = 'Error: ' + err.message;
    el('status').classList.add('error');
  } finally {
    refreshGate();
  }
});

document.querySelectorAll('[data-rating]').forEach((button) => {
  button.addEventListener('click', async () => {
    const resp = await fetch('/feedback', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ rating: button.dataset.rating }),
    });
    const body = await resp.json();
    el('feedback-message').textContent = body.message;
  });
});
</script>
</body>
</html>
"#;
