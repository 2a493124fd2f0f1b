//! Embedded client script for weighted variant selection.
//!
//! The static artifact stays reusable across visits: the server emits every
//! visible candidate with its weight in `data-variants`, and the reader's
//! browser draws the actual destination at page-load time. The algorithm is
//! mirrored server-side by [`crate::choice::choose_weighted`]; keep the two
//! in lockstep.

/// Script tag injected at the bottom of every variant page.
pub(crate) const REDIRECT_SCRIPT: &str = r#"    <script>
      (function () {
        function pickWeighted(pairs) {
          let total = 0;
          for (const p of pairs) {
            const w = Number(p.w);
            if (!Number.isFinite(w) || w <= 0) continue;
            total += w;
          }
          if (total <= 0) return null;
          const a = new Uint32Array(1);
          crypto.getRandomValues(a);
          const u = (a[0] + 1) / 4294967297;
          let threshold = u * total;
          for (const p of pairs) {
            const w = Number(p.w);
            if (!Number.isFinite(w) || w <= 0) continue;
            threshold -= w;
            if (threshold <= 0) return p.slug;
          }
          return pairs[pairs.length - 1]?.slug ?? null;
        }
        function parseVariants(attr) {
          if (!attr) return [];
          return attr
            .split(',')
            .map(pair => {
              const [slug, w] = pair.split(':');
              return { slug: slug?.trim(), w: Number(w ?? 1) };
            })
            .filter(x => x.slug);
        }
        function rewriteLink(a) {
          const pairs = parseVariants(a.getAttribute('data-variants'));
          if (!pairs.length) return;
          const chosen = pickWeighted(pairs);
          if (!chosen) return;
          try {
            const chosenUrl = new URL(a.getAttribute('href'), location.href);
            const parts = chosenUrl.pathname.split('/');
            parts[parts.length - 1] = chosen + '.html';
            chosenUrl.pathname = parts.join('/');
            a.setAttribute('href', chosenUrl.toString());
            a.setAttribute('data-chosen-variant', chosen);
          } catch {}
        }
        function init() {
          document.querySelectorAll('a.variant-link[data-variants]').forEach(rewriteLink);
        }
        if (document.readyState === 'loading') {
          document.addEventListener('DOMContentLoaded', init);
        } else {
          init();
        }
      })();
    </script>"#;
