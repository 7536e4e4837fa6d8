//! Compiled-in stub set.
//!
//! These are the default artifact templates, embedded so a plain
//! `crudgen make` works with no setup. A `--stubs` directory overrides
//! them through [`DirectoryStubs`](super::DirectoryStubs).
//!
//! Stubs are external data as far as the engine is concerned: the
//! placeholder tokens are the contract, the PHP around them is not.

use crudgen_core::application::ports::{StubId, StubRepository};
use crudgen_core::error::CrudgenResult;

const CONTROLLER_STUB: &str = r#"<?php

namespace {{ namespace }};

use App\Http\Controllers\Controller;
use App\Http\Requests\{{ nameSpaceOfClass }}\Create{{ capsName }}Request;
use App\Http\Requests\{{ nameSpaceOfClass }}\Update{{ capsName }}Request;
use App\Services\{{ nameSpaceOfClass }}\{{ capsName }}Service;
use Illuminate\Http\Request;

class {{ className }} extends Controller
{
    public function __construct(protected {{ capsName }}Service ${{ name }}Service)
    {
    }

    public function index(Request $request)
    {
        return $this->{{ name }}Service->list($request->query());
    }

    public function store(Create{{ capsName }}Request $request)
    {
        return $this->{{ name }}Service->create($request->validated());
    }

    public function show($id)
    {
        return $this->{{ name }}Service->find($id);
    }

    public function update(Update{{ capsName }}Request $request, $id)
    {
        return $this->{{ name }}Service->update($id, $request->validated());
    }

    public function destroy($id)
    {
        return $this->{{ name }}Service->delete($id);
    }
}
"#;

const SERVICE_STUB: &str = r#"<?php

namespace {{ namespace }};

use App\Repositories\Contract\{{ nameSpaceOfClass }}\{{ capsName }}RepositoryInterface;

class {{ className }}
{
    public function __construct(protected {{ capsName }}RepositoryInterface ${{ name }}Repository)
    {
    }

    public function list(array $filters)
    {
        return $this->{{ name }}Repository->all($filters);
    }

    public function create(array $data)
    {
        return $this->{{ name }}Repository->create($data);
    }

    public function find($id)
    {
        return $this->{{ name }}Repository->find($id);
    }

    public function update($id, array $data)
    {
        return $this->{{ name }}Repository->update($id, $data);
    }

    public function delete($id)
    {
        return $this->{{ name }}Repository->delete($id);
    }
}
"#;

const REPOSITORY_INTERFACE_STUB: &str = r#"<?php

namespace {{ namespace }};

interface {{ className }}
{
    public function all(array $filters);

    public function create(array $data);

    public function find($id);

    public function update($id, array $data);

    public function delete($id);
}
"#;

const REPOSITORY_STUB: &str = r#"<?php

namespace {{ namespace }};

use App\Models\{{ capsName }};
use App\Repositories\Contract\{{ nameSpaceOfClass }}\{{ capsName }}RepositoryInterface;

class {{ className }} implements {{ capsName }}RepositoryInterface
{
    public function all(array $filters)
    {
        return {{ capsName }}::query()->paginate();
    }

    public function create(array $data)
    {
        return {{ capsName }}::create($data);
    }

    public function find($id)
    {
        return {{ capsName }}::findOrFail($id);
    }

    public function update($id, array $data)
    {
        $record = {{ capsName }}::findOrFail($id);
        $record->update($data);

        return $record;
    }

    public function delete($id)
    {
        return {{ capsName }}::findOrFail($id)->delete();
    }
}
"#;

const REQUEST_STUB: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Foundation\Http\FormRequest;

class {{ className }} extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        return [
		{{ rules }}
        ];
    }

    public function messages(): array
    {
        return [
	{{ messages }}
        ];
    }
}
"#;

const RESOURCE_STUB: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Http\Resources\Json\JsonResource;

class {{ className }} extends JsonResource
{
    public function toArray($request): array
    {
        return [
			{{ fieldsArray }}
        ];
    }

    public function with($request): array
    {
        return [
            'message' => '{{ message }}',
        ];
    }
}
"#;

/// [`StubRepository`] serving the embedded stub set. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }
}

impl StubRepository for BuiltinStubs {
    fn load(&self, stub: StubId) -> CrudgenResult<String> {
        let text = match stub {
            StubId::Controller => CONTROLLER_STUB,
            StubId::Service => SERVICE_STUB,
            StubId::RepositoryInterface => REPOSITORY_INTERFACE_STUB,
            StubId::Repository => REPOSITORY_STUB,
            StubId::Request => REQUEST_STUB,
            StubId::Resource => RESOURCE_STUB,
        };
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stub_id_loads() {
        let stubs = BuiltinStubs::new();
        for id in StubId::ALL {
            assert!(!stubs.load(id).unwrap().is_empty(), "{id}");
        }
    }

    #[test]
    fn request_stub_carries_the_validation_placeholders() {
        let text = BuiltinStubs::new().load(StubId::Request).unwrap();
        assert!(text.contains("{{ rules }}"));
        assert!(text.contains("{{ messages }}"));
        assert!(text.contains("{{ className }}"));
    }

    #[test]
    fn resource_stub_carries_fields_and_message() {
        let text = BuiltinStubs::new().load(StubId::Resource).unwrap();
        assert!(text.contains("{{ fieldsArray }}"));
        assert!(text.contains("{{ message }}"));
    }
}
